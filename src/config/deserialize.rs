// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Validates resource names and ports while parsing.

use serde::Deserialize;

use crate::types::ResourceName;

pub fn deserialize_resource_name_option<'de, D>(
    deserializer: D,
) -> Result<Option<ResourceName>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    opt.map(|s| ResourceName::new(&s).map_err(serde::de::Error::custom))
        .transpose()
}

pub fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let port = u16::deserialize(deserializer)?;
    if port == 0 {
        return Err(serde::de::Error::custom("port must be between 1 and 65535"));
    }
    Ok(port)
}
