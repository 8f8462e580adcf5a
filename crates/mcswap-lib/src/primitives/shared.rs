/// Derive `FromStr` for a `clap::ValueEnum` so config files, env vars and
/// flags all accept the same names and aliases.
#[macro_export]
macro_rules! impl_fromstr_for_value_enum {
    ($enum_type:ty, $error_reason:expr) => {
        impl ::std::str::FromStr for $enum_type {
            type Err = $crate::primitives::ConfigError;

            fn from_str(s: &str) -> Result<Self, $crate::primitives::ConfigError> {
                <Self as ::clap::ValueEnum>::value_variants()
                    .iter()
                    .find(|variant| {
                        <$enum_type as ::clap::ValueEnum>::to_possible_value(variant)
                            .is_some_and(|value| value.matches(s, true))
                    })
                    .copied()
                    .ok_or_else(|| $crate::primitives::ConfigError::ParseError {
                        value: s.to_string(),
                        reason: $error_reason.to_string(),
                    })
            }
        }
    };
}

pub(crate) use impl_fromstr_for_value_enum;
