use tokio::time::{Duration, timeout};
use tracing::debug;

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::snmp::{SnmpClientV2c, parse_oid, pool_oid_suffix};

pub mod types;

pub use types::PoolCounters;

// ltmPoolActiveMemberCnt
const ACTIVE_MEMBER_COUNT_OID: &str = ".1.3.6.1.4.1.3375.2.2.5.1.2.1.8";
// ltmPoolMemberCnt
const AVAILABLE_MEMBER_COUNT_OID: &str = ".1.3.6.1.4.1.3375.2.2.5.1.2.1.23";
// ltmPoolStatusAvailState
const POOL_AVAILABILITY_COUNT_OID: &str = ".1.3.6.1.4.1.3375.2.2.5.5.2.1.2";

/// Коллектор показаний одного пула
pub struct PoolCollector;

impl PoolCollector {
    /// Собирает все три счётчика тремя последовательными walk'ами.
    /// Любая ошибка транспорта обрывает проверку целиком, частичных
    /// результатов не бывает.
    pub async fn collect(
        client: &mut SnmpClientV2c,
        config: &CheckConfig,
    ) -> Result<PoolCounters, CheckError> {
        let suffix = pool_oid_suffix(&config.pool);

        let active_members =
            Self::walk_counter(client, ACTIVE_MEMBER_COUNT_OID, &suffix, config).await?;
        let available_members =
            Self::walk_counter(client, AVAILABLE_MEMBER_COUNT_OID, &suffix, config).await?;
        let pool_status =
            Self::walk_counter(client, POOL_AVAILABILITY_COUNT_OID, &suffix, config).await?;

        Ok(PoolCounters {
            active_members,
            available_members,
            pool_status,
        })
    }

    /// Обходит одно поддерево и достаёт значение для пула
    async fn walk_counter(
        client: &mut SnmpClientV2c,
        subtree: &str,
        suffix: &str,
        config: &CheckConfig,
    ) -> Result<Option<String>, CheckError> {
        let root =
            parse_oid(subtree).map_err(|e| CheckError::snmp(subtree, &config.target(), e))?;

        let timeout_duration = Duration::from_secs(config.timeout());
        let rows = match timeout(timeout_duration, client.walk(&root)).await {
            Ok(Ok(rows)) => rows,
            Ok(Err(e)) => return Err(CheckError::snmp(subtree, &config.target(), e)),
            Err(_) => {
                return Err(CheckError::snmp(
                    subtree,
                    &config.target(),
                    anyhow::anyhow!("таймаут после {} сек", config.timeout()),
                ));
            }
        };

        let matched = Self::last_suffix_match(&rows, suffix);
        debug!(subtree, rows = rows.len(), matched = ?matched, "walk завершён");

        Ok(matched)
    }

    /// Ищет запись, чей OID оканчивается на суффикс пула.
    /// При нескольких совпадениях побеждает последняя по порядку обхода —
    /// это зафиксированное правило, а не случайность реализации.
    /// Пустой суффикс не совпадает ни с чем.
    fn last_suffix_match(rows: &[(String, String)], suffix: &str) -> Option<String> {
        if suffix.is_empty() {
            return None;
        }

        let mut matched = None;
        for (oid, value) in rows {
            if oid.ends_with(suffix) {
                matched = Some(value.clone());
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(oid, value)| (oid.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn finds_entry_by_oid_suffix() {
        // "web-pool" в посимвольной кодировке, с префиксом длины от F5
        let table = rows(&[
            (
                "1.3.6.1.4.1.3375.2.2.5.1.2.1.8.8.97.112.105.45.112.111.111.108",
                "2",
            ),
            (
                "1.3.6.1.4.1.3375.2.2.5.1.2.1.8.8.119.101.98.45.112.111.111.108",
                "3",
            ),
        ]);
        let suffix = pool_oid_suffix("web-pool");
        assert_eq!(
            PoolCollector::last_suffix_match(&table, &suffix),
            Some("3".to_string())
        );
    }

    #[test]
    fn last_match_wins_on_duplicate_suffixes() {
        let table = rows(&[
            ("1.3.6.1.4.1.3375.2.2.5.1.2.1.8.3.102.111.111", "1"),
            ("1.3.6.1.4.1.3375.2.2.5.1.2.1.8.9.3.102.111.111", "2"),
        ]);
        assert_eq!(
            PoolCollector::last_suffix_match(&table, ".102.111.111"),
            Some("2".to_string())
        );
    }

    #[test]
    fn no_match_yields_none() {
        let table = rows(&[(
            "1.3.6.1.4.1.3375.2.2.5.1.2.1.8.8.97.112.105.45.112.111.111.108",
            "2",
        )]);
        let suffix = pool_oid_suffix("missing-pool");
        assert_eq!(PoolCollector::last_suffix_match(&table, &suffix), None);
    }

    #[test]
    fn empty_suffix_matches_nothing() {
        // ends_with("") совпал бы со всем подряд; пустое имя пула
        // обязано проваливаться в "пул не найден"
        let table = rows(&[("1.3.6.1.4.1.3375.2.2.5.1.2.1.8.3.102.111.111", "1")]);
        assert_eq!(PoolCollector::last_suffix_match(&table, ""), None);
    }

    #[test]
    fn empty_table_yields_none() {
        assert_eq!(PoolCollector::last_suffix_match(&[], ".102.111.111"), None);
    }
}
