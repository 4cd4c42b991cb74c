use anyhow::{Context, Result};
use snmp2::{AsyncSession, Oid, Value};

/// SNMPv2c клиент поверх асинхронной сессии
pub struct SnmpClientV2c {
    session: AsyncSession,
}

impl SnmpClientV2c {
    pub async fn new(target: &str, community: &[u8]) -> Result<Self> {
        let session = AsyncSession::new_v2c(target, community, 2)
            .await
            .context("Не удалось создать SNMP сессию")?;

        Ok(Self { session })
    }

    /// Обходит поддерево целиком. Возвращает пары
    /// (OID в точечной записи, значение строкой).
    pub async fn walk(&mut self, root_oid: &Oid<'_>) -> Result<Vec<(String, String)>> {
        self.walk_bulk(root_oid, 10).await
    }

    pub async fn walk_bulk(
        &mut self,
        start_oid: &Oid<'_>,
        max_repetitions: u32,
    ) -> Result<Vec<(String, String)>> {
        let mut results: Vec<(String, String)> = Vec::new();
        let mut current_oid = start_oid.to_owned();

        loop {
            let resp = self
                .session
                .getbulk(&[&current_oid], 0, max_repetitions)
                .await
                .context("SNMP GETBULK запрос не удался")?;

            let mut items = Vec::new();
            let mut found_any = false;

            for (oid, value) in resp.varbinds {
                if !oid.starts_with(start_oid) {
                    // Вышли за пределы поддерева
                    results.extend(items);
                    return Ok(results);
                }

                items.push((oid.to_string(), render_value(&value)));
                current_oid = oid.to_owned();
                found_any = true;
            }

            if !found_any {
                break;
            }

            results.extend(items);
        }

        Ok(results)
    }
}

/// Переводит SNMP значение в строку. Вся целочисленная семья отдаётся
/// голыми цифрами, чтобы счётчики парсились обратно в число.
fn render_value(value: &Value<'_>) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Counter32(n) | Value::Unsigned32(n) | Value::Timeticks(n) => n.to_string(),
        Value::Counter64(n) => n.to_string(),
        Value::OctetString(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        other => format!("{:?}", other),
    }
}
