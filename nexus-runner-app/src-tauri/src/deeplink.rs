//! Launch URLs carried by pinned shortcuts.
//!
//! A shortcut fires `nexus://run?id=<project>`. The same project id may also
//! arrive over an https link that routes to `/run`.

use serde::{Deserialize, Serialize};
use url::Url;

pub const SCHEME: &str = "nexus";
const RUN_ROUTE: &str = "run";

/// Where a launch URL should take the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LaunchTarget {
    /// Open a stored project in the runner.
    Project { id: String },
    /// Not ours; hand it to the system browser.
    External { url: String },
}

pub fn parse_launch_url(raw: &str) -> LaunchTarget {
    let external = || LaunchTarget::External {
        url: raw.to_string(),
    };

    let Ok(url) = Url::parse(raw) else {
        return external();
    };

    let id = url
        .query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty());
    let Some(id) = id else {
        return external();
    };

    let is_custom_scheme = url.scheme() == SCHEME;
    let is_run_route =
        url.host_str() == Some(RUN_ROUTE) || url.path().contains(&format!("/{}", RUN_ROUTE));

    if is_custom_scheme || is_run_route {
        LaunchTarget::Project { id }
    } else {
        external()
    }
}

/// The URI a pinned shortcut for `project_id` launches.
pub fn project_intent_uri(project_id: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id", project_id)
        .finish();
    format!("{}://{}?{}", SCHEME, RUN_ROUTE, query)
}
