use std::{env, path::PathBuf, str::FromStr};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/state.json";
pub const DEFAULT_MONTHLY_GOAL: i64 = 80;
pub const BASE_SAL_PAYMENT: u64 = 25;
pub const APPOINTMENT_BONUS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRules {
    pub base_sal_payment: u64,
    pub appointment_bonus: u64,
}

impl Default for PaymentRules {
    fn default() -> Self {
        Self {
            base_sal_payment: BASE_SAL_PAYMENT,
            appointment_bonus: APPOINTMENT_BONUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub port: u16,
    pub data_path: PathBuf,
    pub monthly_goal: i64,
    pub payments: PaymentRules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            monthly_goal: DEFAULT_MONTHLY_GOAL,
            payments: PaymentRules::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parse_or("PORT", &lookup, defaults.port),
            data_path: lookup("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            monthly_goal: parse_or("SAL_MONTHLY_GOAL", &lookup, defaults.monthly_goal),
            payments: PaymentRules {
                base_sal_payment: parse_or(
                    "SAL_BASE_PAYMENT",
                    &lookup,
                    defaults.payments.base_sal_payment,
                ),
                appointment_bonus: parse_or(
                    "SAL_APPOINTMENT_BONUS",
                    &lookup,
                    defaults.payments.appointment_bonus,
                ),
            },
        }
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={raw:?}, using {default}");
            default
        }),
        None => default,
    }
}
