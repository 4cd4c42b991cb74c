use anyhow::{Context, Result};
use snmp2::Oid;

/// Парсит строку OID в объект Oid. Ведущая точка допускается.
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts: Result<Vec<u64>, _> = s
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.context(format!("Невалидный OID: {}", s))?;
    Oid::from(&parts)
        .map_err(|e| anyhow::anyhow!("Не удалось создать Oid из '{}': {:?}", s, e))
}

/// Переводит имя пула в OID-суффикс: для каждого символа ".<код символа>".
/// Именно так F5 индексирует записи пула внутри своих таблиц.
pub fn pool_oid_suffix(pool: &str) -> String {
    let mut suffix = String::new();
    for ch in pool.chars() {
        suffix.push('.');
        suffix.push_str(&(ch as u32).to_string());
    }
    suffix
}
