//! Human-readable summaries of populated configuration objects.

use std::collections::BTreeMap;

use crate::schema::ConfigSchema;

/// Render every schema field of `conf` as a name to value-string map.
///
/// Fields the configuration cannot read back are rendered as `<unset>`.
/// The map is ordered by field name, which makes the summary stable for
/// logging and startup banners.
pub fn summarize<C: ConfigSchema>(conf: &C) -> BTreeMap<String, String> {
    C::descriptors()
        .iter()
        .map(|descriptor| {
            let name = descriptor.name().to_string();
            let rendered = match conf.get(descriptor.name()) {
                Some(value) => value.to_string(),
                None => "<unset>".to_string(),
            };
            (name, rendered)
        })
        .collect()
}
