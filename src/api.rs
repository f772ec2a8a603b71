use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const SYMBOLS_BASE: &str = "https://symbols-electrical.getvecta.com";
const CATALOG_BASE: &str = "https://symbols.radicasoftware.com";
const USER_AGENT: &str = "radica2fusioncad_rs/0.1.0";

/// One entry in a batch download request file.
#[derive(Deserialize, Debug, Clone)]
pub struct SymbolRequest {
    pub stencil: u32,
    pub id: u32,
    pub slug: String,
    #[serde(default)]
    pub variant: Option<String>,
}

/// A symbol discovered on a stencil catalog page.
#[derive(Serialize, Debug, Clone)]
pub struct StencilSymbol {
    pub id: u32,
    pub slug: String,
    pub stencil_id: u32,
}

pub struct RadicaApi {
    client: reqwest::Client,
}

impl RadicaApi {
    pub fn new() -> Self {
        RadicaApi {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap(),
        }
    }

    /// Catalog page names for known stencils.
    fn stencil_name(stencil_id: u32) -> &'static str {
        match stencil_id {
            229 => "single-line-symbols",
            _ => "symbols",
        }
    }

    /// Scrapes a symbol's catalog detail page for the content hash embedded
    /// in its download links. The hash changes when artwork is republished,
    /// so it cannot be cached across runs.
    pub async fn fetch_symbol_hash(
        &self,
        stencil_id: u32,
        symbol_id: u32,
        slug: &str,
    ) -> Result<String> {
        let url = format!(
            "{}/{}/{}/{}/{}",
            CATALOG_BASE,
            stencil_id,
            Self::stencil_name(stencil_id),
            symbol_id,
            slug
        );
        let html = self.client.get(&url).send().await?.text().await?;

        let pattern = format!(
            r"stencil_{}/{}_{}\.([a-f0-9]+)\.svg",
            stencil_id,
            symbol_id,
            regex::escape(slug)
        );
        let re = Regex::new(&pattern).map_err(|e| Error::ParseError(e.to_string()))?;

        re.captures(&html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| Error::MissingData(format!("no download hash found for '{}'", slug)))
    }

    /// Downloads the SVG artwork for a symbol.
    pub async fn get_symbol_svg(
        &self,
        stencil_id: u32,
        symbol_id: u32,
        slug: &str,
        hash: &str,
    ) -> Result<String> {
        let url = Self::download_url(stencil_id, symbol_id, slug, hash, "svg");
        let res = self.client.get(&url).send().await?;
        if res.status().is_success() {
            Ok(res.text().await?)
        } else {
            Err(Error::MissingData(format!(
                "no SVG artwork found for '{}'",
                slug
            )))
        }
    }

    /// Downloads symbol artwork in an alternate format (png, dxf, dwg, jpg).
    pub async fn get_symbol_file(
        &self,
        stencil_id: u32,
        symbol_id: u32,
        slug: &str,
        hash: &str,
        format: &str,
    ) -> Result<bytes::Bytes> {
        let url = Self::download_url(stencil_id, symbol_id, slug, hash, format);
        let res = self.client.get(&url).send().await?;
        if res.status().is_success() {
            Ok(res.bytes().await?)
        } else {
            Err(Error::MissingData(format!(
                "no {} artwork found for '{}'",
                format, slug
            )))
        }
    }

    /// Lists every symbol on a stencil's catalog page, sorted by id.
    pub async fn list_stencil_symbols(&self, stencil_id: u32) -> Result<Vec<StencilSymbol>> {
        let stencil_name = Self::stencil_name(stencil_id);
        let url = format!("{}/{}/{}", CATALOG_BASE, stencil_id, stencil_name);
        let html = self.client.get(&url).send().await?.text().await?;

        let pattern = format!(
            r#"href="/{}/{}/(\d+)/([^"]+)""#,
            stencil_id,
            regex::escape(stencil_name)
        );
        let re = Regex::new(&pattern).map_err(|e| Error::ParseError(e.to_string()))?;

        let mut symbols = Vec::new();
        let mut seen = HashSet::new();
        for caps in re.captures_iter(&html) {
            let Ok(id) = caps[1].parse::<u32>() else {
                continue;
            };
            let slug = caps[2].to_string();
            if seen.insert((id, slug.clone())) {
                symbols.push(StencilSymbol {
                    id,
                    slug,
                    stencil_id,
                });
            }
        }

        symbols.sort_by_key(|symbol| symbol.id);
        Ok(symbols)
    }

    fn download_url(
        stencil_id: u32,
        symbol_id: u32,
        slug: &str,
        hash: &str,
        format: &str,
    ) -> String {
        format!(
            "{}/stencil_{}/{}_{}.{}.{}",
            SYMBOLS_BASE, stencil_id, symbol_id, slug, hash, format
        )
    }
}
