use std::sync::Arc;

use crate::application::api::Api;
use crate::ports::outbound::CharacterStorePort;
use crate::state::Platform;

pub struct RunnerDeps {
    pub platform: Platform,
    pub api: Api,
    pub store: Arc<dyn CharacterStorePort>,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        platform,
        api,
        store,
    } = deps;

    let css = load_player_css();
    let head = format!("<style>{}</style>", css);
    let cfg = dioxus_desktop::Config::new().with_custom_head(head);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(platform)
        .with_context(crate::ui::presentation::Services::new(api, store))
        .launch(crate::ui::app);
}

fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/player.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
