use anyhow::Result;

pub mod oid;
pub mod v2c;

pub use oid::{parse_oid, pool_oid_suffix};
pub use v2c::SnmpClientV2c;

// TODO: фабрика для SNMPv3 (authPriv), когда BIG-IP перестанут пускать по v2c
pub async fn create_v2c_client(target: &str, community: &[u8]) -> Result<SnmpClientV2c> {
    SnmpClientV2c::new(target, community).await
}
