use super::*;
use crate::primitives::TerminalColorCaps;

fn caps(color: TerminalColorCaps, unicode: bool) -> TerminalCapabilities {
    TerminalCapabilities {
        color,
        unicode,
        is_tty: true,
    }
}

#[test]
fn test_plain_terminal_gets_ascii_without_escapes() {
    let styling = StyleManager::new(&TerminalCapabilities::minimal());

    assert_eq!(styling.format_success("done"), "+ done");
    assert_eq!(styling.format_error("failed"), "x failed");
    assert_eq!(styling.format_warning("careful"), "! careful");
    assert_eq!(styling.style_emphasis("bold"), "bold");
    assert_eq!(styling.bullet(), "-");
}

#[test]
fn test_unicode_terminal_gets_unicode_symbols() {
    let styling = StyleManager::new(&caps(TerminalColorCaps::None, true));

    assert_eq!(styling.symbols(), &Symbols::UNICODE);
    assert_eq!(styling.format_info("note"), "ℹ note");
}

#[test]
fn test_color_terminal_wraps_text_in_escapes() {
    let styling = StyleManager::new(&caps(TerminalColorCaps::Ansi256, false));

    let styled = styling.style_success("ok");
    assert!(styled.contains("ok"));
    assert!(styled.contains('\u{1b}'));
    assert_eq!(console::strip_ansi_codes(&styled), "ok");
}
