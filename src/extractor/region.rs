//! Region resolution from the upstream base URL
//!
//! Only a few platforms encode a region in their endpoint hostname; for the
//! rest the region dimension stays "global".

use url::Url;

/// Resolve the deployment region for the given platform.
///
/// bedrock hosts look like `bedrock-runtime.us-east-1.amazonaws.com` (label
/// index 1), azure and google put the region or resource first, e.g.
/// `myres.openai.azure.com` (label index 0). Returns `None` whenever the
/// base URL is missing or unparseable; callers fall back to "global".
pub(super) fn resolve_region(platform: &str, api_base: Option<&str>) -> Option<String> {
    match platform {
        "bedrock" => domain_label(api_base?, 1),
        "azure" | "google" => domain_label(api_base?, 0),
        _ => None,
    }
}

fn domain_label(api_base: &str, index: usize) -> Option<String> {
    let url = Url::parse(api_base).ok()?;
    let hostname = url.host_str()?;
    hostname.split('.').nth(index).map(str::to_string)
}
