//! SNMP session: one instance per device, lazily establishing transport and
//! credentials on first use.

use std::collections::HashMap;
use std::net::SocketAddr;

use snmp2::{AsyncSession, Value};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::config::{SessionConfig, SnmpCredentials};
use super::values::SnmpValue;
use super::{SnmpError, SnmpResult};

/// Outcome of a session operation, distinguishing "device unreachable" from
/// "SNMP engine returned an error" from "device answered cleanly".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome<T> {
    /// The operation completed and produced a value.
    Value(T),
    /// The probe failed; the device did not accept a TCP connection.
    Unreachable,
    /// The transport or SNMP engine reported an error.
    ProtocolError(String),
}

fn parse_oid(oid: &str) -> SnmpResult<Vec<u32>> {
    oid.split('.')
        .map(|part| {
            part.parse::<u32>().map_err(|_| SnmpError::InvalidOid {
                oid: oid.to_string(),
            })
        })
        .collect()
}

fn oid_to_string(components: &[u32]) -> String {
    components
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Normalize a raw `snmp2::Value` into our parsed representation.
///
/// Never panics: unrecognized or malformed values are stringified and
/// logged rather than raising.
fn normalize_value(value: &Value<'_>) -> SnmpValue {
    match value {
        Value::Boolean(b) => SnmpValue::Integer(i64::from(*b)),
        Value::Integer(i) => SnmpValue::Integer(*i),
        Value::OctetString(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => SnmpValue::String(s.to_string()),
            Err(_) => SnmpValue::String(format!("{bytes:?}")),
        },
        Value::ObjectIdentifier(oid) => SnmpValue::Oid(oid.to_string()),
        Value::IpAddress(ip) => SnmpValue::IpAddress(std::net::IpAddr::V4((*ip).into())),
        Value::Counter32(c) => SnmpValue::Counter32(*c),
        Value::Unsigned32(u) => SnmpValue::Gauge32(*u),
        Value::Timeticks(t) => SnmpValue::TimeTicks(*t),
        Value::Counter64(c) => SnmpValue::Counter64(*c),
        Value::Opaque(bytes) => SnmpValue::Opaque(bytes.to_vec()),
        Value::Null => SnmpValue::Null,
        Value::NoSuchObject => SnmpValue::NoSuchObject,
        Value::NoSuchInstance => SnmpValue::NoSuchInstance,
        Value::EndOfMibView => SnmpValue::EndOfMibView,
        other => {
            warn!(value = ?other, "Unrecognized SNMP value variant, stringifying");
            SnmpValue::String(format!("{other:?}"))
        }
    }
}

/// SNMP session for a single device.
#[derive(Debug, Clone)]
pub struct SnmpSession {
    config: SessionConfig,
}

impl SnmpSession {
    /// Create a new, not-yet-connected session.
    #[must_use]
    pub const fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Target address of this session.
    #[must_use]
    pub const fn address(&self) -> SocketAddr {
        self.config.address
    }

    /// Session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Attempt a TCP connect-and-close to classify reachability before
    /// firing SNMP requests, which are connectionless and would otherwise
    /// hang until timeout against a dead host.
    pub async fn probe(&self) -> bool {
        match timeout(self.config.timeout, TcpStream::connect(self.config.address)).await {
            Ok(Ok(_stream)) => true,
            Ok(Err(e)) => {
                debug!(target = %self.config.address, error = %e, "Reachability probe failed");
                false
            }
            Err(_) => {
                debug!(target = %self.config.address, "Reachability probe timed out");
                false
            }
        }
    }

    async fn open(&self) -> SnmpResult<AsyncSession> {
        let SnmpCredentials::Community { community } = &self.config.credentials;
        let community = community.as_bytes();
        let session = match self.config.version {
            1 => AsyncSession::new_v1(self.config.address, community, 0).await,
            _ => AsyncSession::new_v2c(self.config.address, community, 0).await,
        }
        .map_err(|e| SnmpError::Network(std::io::Error::other(e.to_string())))?;
        Ok(session)
    }

    /// Single-OID fetch.
    ///
    /// # Errors
    ///
    /// Returns `SnmpError::Network` if the device fails the reachability
    /// probe, or a protocol/timeout error if the transport/engine fails.
    /// A clean SNMP error-status on the returned varbind yields `Ok(None)`.
    pub async fn get(&self, oid: &str) -> SnmpResult<Option<SnmpValue>> {
        if !self.probe().await {
            return Err(SnmpError::Network(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "device unreachable",
            )));
        }

        let components = parse_oid(oid)?;
        let mut session = self.open().await?;
        let mut pdu = timeout(self.config.timeout, session.get(&[&components]))
            .await
            .map_err(|_| SnmpError::Timeout {
                duration: self.config.timeout,
            })?
            .map_err(|e| SnmpError::Protocol {
                message: e.to_string(),
            })?;

        match pdu.varbinds.next() {
            Some((_, value)) => {
                let parsed = normalize_value(&value);
                if parsed.is_error() {
                    debug!(target = %self.config.address, oid, value = %parsed, "SNMP error-status on GET");
                    Ok(None)
                } else {
                    Ok(Some(parsed))
                }
            }
            None => Ok(None),
        }
    }

    /// Multi-OID fetch packed into a single PDU. On any error the returned
    /// map has every requested OID mapped to `None` so per-interface fetches
    /// can continue rather than aborting the whole poll.
    pub async fn get_multiple(&self, oids: &[&str]) -> HashMap<String, Option<SnmpValue>> {
        let all_null = || oids.iter().map(|o| ((*o).to_string(), None)).collect();

        if !self.probe().await {
            return all_null();
        }

        let Ok(components): SnmpResult<Vec<Vec<u32>>> =
            oids.iter().map(|o| parse_oid(o)).collect()
        else {
            return all_null();
        };
        let refs: Vec<&[u32]> = components.iter().map(Vec::as_slice).collect();

        let Ok(mut session) = self.open().await else {
            return all_null();
        };

        let result = timeout(self.config.timeout, session.get(&refs)).await;
        let Ok(Ok(mut pdu)) = result else {
            return all_null();
        };

        let mut out: HashMap<String, Option<SnmpValue>> = all_null();
        for (idx, (_returned_oid, value)) in pdu.varbinds.by_ref().enumerate() {
            let Some(oid_str) = oids.get(idx) else {
                continue;
            };
            let parsed_value = normalize_value(&value);
            let entry = if parsed_value.is_error() {
                None
            } else {
                Some(parsed_value)
            };
            out.insert((*oid_str).to_string(), entry);
        }
        out
    }

    /// Subtree walk. Prefers GETBULK when `bulk_walk_enabled` is set,
    /// otherwise falls back to GETNEXT. Terminates cleanly (returning what
    /// was gathered so far) on the first out-of-subtree OID, empty response,
    /// or error indication.
    pub async fn walk(&self, root_oid: &str) -> Vec<(String, SnmpValue)> {
        if !self.probe().await {
            return Vec::new();
        }

        let Ok(root) = parse_oid(root_oid) else {
            return Vec::new();
        };

        let Ok(mut session) = self.open().await else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut current = root.clone();

        loop {
            let step = if self.config.bulk_walk_enabled {
                timeout(
                    self.config.timeout,
                    session.getbulk(&[&current], 0, 25),
                )
                .await
            } else {
                timeout(self.config.timeout, session.getnext(&current)).await
            };

            let Ok(Ok(mut pdu)) = step else {
                break;
            };

            let mut advanced = false;
            for (returned_oid, value) in pdu.varbinds.by_ref() {
                let returned: Vec<u32> = returned_oid.into();
                if !returned.starts_with(root.as_slice()) {
                    return results;
                }
                if matches!(value, Value::EndOfMibView) {
                    return results;
                }
                let parsed = normalize_value(&value);
                if !parsed.is_error() {
                    results.push((oid_to_string(&returned), parsed));
                }
                current = returned;
                advanced = true;
            }

            if !advanced {
                break;
            }
        }

        results
    }

    /// Release session resources. Sessions in this implementation are
    /// opened per-operation, so this is a no-op kept for API symmetry.
    pub const fn close(&self) {}
}
