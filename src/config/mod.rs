use std::env;

use clap::Parser;

use crate::error::CheckError;

/// Таймаут одного walk'а по умолчанию (секунды)
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Аргументы командной строки. Интерфейс совместим с исходным плагином
/// один в один, включая значения по умолчанию.
#[derive(Debug, Parser)]
#[command(name = "check_bigip_pools", about = "Check the status of an LTM pool")]
pub struct Args {
    /// SNMP version
    #[arg(short = 'v', long = "version")]
    pub version: i64,

    /// SNMPv2 community string
    #[arg(short = 'C', long = "community")]
    pub community: String,

    /// ip address or hostname
    #[arg(short = 'i', long = "ipaddress")]
    pub ipaddress: String,

    /// port
    #[arg(short = 'p', long = "port", default_value_t = 161)]
    pub port: u16,

    /// Threshold for critical
    #[arg(
        short = 'c',
        long = "critical",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub critical: i64,

    /// Threshold for warning
    #[arg(
        short = 'w',
        long = "warning",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub warning: i64,

    /// pool to check
    pub pool: String,
}

/// Неизменяемая конфигурация одной проверки. Собирается один раз
/// и передаётся явно, никакого глобального состояния.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub community: String,
    pub ipaddress: String,
    pub port: u16,
    pub critical: i64,
    pub warning: i64,
    pub pool: String,
}

impl CheckConfig {
    /// Валидирует аргументы до любых сетевых вызовов.
    /// Версия протокола проверяется раньше порядка порогов.
    pub fn from_args(args: Args) -> Result<Self, CheckError> {
        if args.version != 2 {
            return Err(CheckError::UnsupportedVersion);
        }

        if args.critical > args.warning {
            return Err(CheckError::ThresholdOrder {
                critical: args.critical,
                warning: args.warning,
            });
        }

        Ok(Self {
            community: args.community,
            ipaddress: args.ipaddress,
            port: args.port,
            critical: args.critical,
            warning: args.warning,
            pool: args.pool,
        })
    }

    /// Адрес цели для SNMP сессии
    pub fn target(&self) -> String {
        format!("{}:{}", self.ipaddress, self.port)
    }

    /// Таймаут walk'а из переменной окружения или значение по умолчанию
    pub fn timeout(&self) -> u64 {
        env::var("SNMP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::ServiceState;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).expect("argv должен парситься")
    }

    #[test]
    fn defaults_match_the_original_plugin() {
        let args = parse(&[
            "check_bigip_pools",
            "-v",
            "2",
            "-C",
            "public",
            "-i",
            "10.0.0.1",
            "web-pool",
        ]);
        assert_eq!(args.port, 161);
        assert_eq!(args.critical, 0);
        assert_eq!(args.warning, 1);
        assert_eq!(args.pool, "web-pool");
    }

    #[test]
    fn long_flags_are_accepted() {
        let args = parse(&[
            "check_bigip_pools",
            "--version",
            "2",
            "--community",
            "public",
            "--ipaddress",
            "lb.example.com",
            "--port",
            "1161",
            "--critical",
            "1",
            "--warning",
            "2",
            "web-pool",
        ]);
        let config = CheckConfig::from_args(args).unwrap();
        assert_eq!(config.target(), "lb.example.com:1161");
        assert_eq!(config.critical, 1);
        assert_eq!(config.warning, 2);
    }

    #[test]
    fn missing_community_is_a_usage_error() {
        assert!(
            Args::try_parse_from(["check_bigip_pools", "-v", "2", "-i", "10.0.0.1", "web-pool"])
                .is_err()
        );
    }

    #[test]
    fn missing_pool_is_a_usage_error() {
        assert!(Args::try_parse_from([
            "check_bigip_pools",
            "-v",
            "2",
            "-C",
            "public",
            "-i",
            "10.0.0.1"
        ])
        .is_err());
    }

    #[test]
    fn version_other_than_2_is_rejected_as_critical() {
        let args = parse(&[
            "check_bigip_pools",
            "-v",
            "1",
            "-C",
            "public",
            "-i",
            "10.0.0.1",
            "web-pool",
        ]);
        let err = CheckConfig::from_args(args).unwrap_err();
        assert!(matches!(err, CheckError::UnsupportedVersion));
        assert_eq!(err.state(), ServiceState::Critical);
        assert_eq!(err.state().exit_code(), 2);
    }

    #[test]
    fn inverted_thresholds_are_a_config_error() {
        let args = parse(&[
            "check_bigip_pools",
            "-v",
            "2",
            "-C",
            "public",
            "-i",
            "10.0.0.1",
            "-c",
            "5",
            "-w",
            "2",
            "web-pool",
        ]);
        let err = CheckConfig::from_args(args).unwrap_err();
        assert_eq!(err.to_string(), "ERROR: critical (5) > warning (2)");
        assert_eq!(err.state(), ServiceState::Unknown);
        assert_eq!(err.state().exit_code(), 3);
    }

    #[test]
    fn version_is_checked_before_thresholds() {
        // Обе ошибки сразу: побеждает версия, как в оригинале
        let args = parse(&[
            "check_bigip_pools",
            "-v",
            "3",
            "-C",
            "public",
            "-i",
            "10.0.0.1",
            "-c",
            "5",
            "-w",
            "2",
            "web-pool",
        ]);
        let err = CheckConfig::from_args(args).unwrap_err();
        assert!(matches!(err, CheckError::UnsupportedVersion));
    }

    #[test]
    fn equal_thresholds_are_allowed() {
        let args = parse(&[
            "check_bigip_pools",
            "-v",
            "2",
            "-C",
            "public",
            "-i",
            "10.0.0.1",
            "-c",
            "1",
            "-w",
            "1",
            "web-pool",
        ]);
        assert!(CheckConfig::from_args(args).is_ok());
    }
}
