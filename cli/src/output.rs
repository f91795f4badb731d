//! Rendering of resolved profiles.

use settings::{ConfigProfile, ProfileName};

use crate::args::OutputFormat;

/// Render every setting of `profile`, masking sensitive values unless `reveal`.
pub fn render_profile(
    name: ProfileName,
    profile: &ConfigProfile,
    format: OutputFormat,
    reveal: bool,
) -> Result<String, serde_json::Error> {
    let settings = if reveal {
        profile.settings()
    } else {
        profile.redacted_settings()
    };

    match format {
        OutputFormat::Text => {
            let mut out = format!("# profile: {}\n", name);
            for (key, value) in &settings {
                out.push_str(&format!("{}={}\n", key, value));
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&settings),
    }
}

/// Render the list of profile names, one per line.
pub fn render_profile_names() -> String {
    ProfileName::ALL
        .iter()
        .map(|name| format!("{}\n", name))
        .collect()
}
