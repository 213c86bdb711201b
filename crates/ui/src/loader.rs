use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, Response};

use kidsplay_content::documents::{BrandingDocument, GamesDocument, ThemeDocument};
use kidsplay_content::error::LoadError;

/// The three site documents, loaded once per page view and immutable
/// after. Renderers take this by shared reference.
pub struct SiteData {
    pub branding: BrandingDocument,
    pub theme: ThemeDocument,
    pub games: GamesDocument,
}

fn transport(url: &str, detail: &JsValue) -> LoadError {
    LoadError::Transport {
        url: url.to_string(),
        detail: format!("{detail:?}"),
    }
}

/// Fetch a JSON resource and deserialize it.
///
/// Non-ok status maps to `LoadError::Fetch`, a malformed body to
/// `LoadError::Parse`. No timeout is applied; a hung request stalls
/// the pipeline.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
    let win = window().ok_or_else(|| transport(url, &"no window".into()))?;
    let req = Request::new_with_str(url).map_err(|e| transport(url, &e))?;
    let resp_val = JsFuture::from(win.fetch_with_request(&req))
        .await
        .map_err(|e| transport(url, &e))?;
    let resp: Response = resp_val.dyn_into().map_err(|e| transport(url, &e))?;

    if !resp.ok() {
        return Err(LoadError::Fetch {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let text_promise = resp.text().map_err(|e| transport(url, &e))?;
    let text_val = JsFuture::from(text_promise)
        .await
        .map_err(|e| transport(url, &e))?;
    let body = text_val.as_string().unwrap_or_default();

    serde_json::from_str(&body).map_err(|source| LoadError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Load all three documents. All-or-nothing: any failure aborts the
/// whole load and no partial rendering occurs.
pub async fn load_all_data() -> Result<SiteData, LoadError> {
    let branding = fetch_json("./data/branding.json").await?;
    let theme = fetch_json("./data/theme.json").await?;
    let games = fetch_json("./data/games.json").await?;
    Ok(SiteData {
        branding,
        theme,
        games,
    })
}
