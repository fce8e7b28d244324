//! URL and POST form assembly
//!
//! Output layout: `cht` first, `chs` next when the chart has a size, then
//! every non-empty feature group in ascending prefix order. Identical chart
//! state always produces identical output.

use crate::chart::Chart;
use crate::data_types::OutputFormat;
use crate::error::Result;
use crate::features::FeatureRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default GET location of the chart service.
pub const GOOGLE_API: &str = "http://chart.apis.google.com/chart?";
/// Default POST location of the chart service.
pub const GOOGLE_POST_API: &str = "http://chart.apis.google.com/chart";

pub const AMPERSAND_SEPARATOR: &str = "&";

/// Prefixes written by the assembler itself; feature groups using them are
/// skipped.
pub const RESERVED_PREFIXES: [&str; 2] = ["cht", "chs"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prepended verbatim to the query string.
    pub api_location: String,
    /// Form action of POST requests.
    pub post_location: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_location: GOOGLE_API.to_string(),
            post_location: GOOGLE_POST_API.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A fully rendered parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlElement {
    prefix: String,
    content: String,
}

impl UrlElement {
    pub fn new(prefix: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            content: content.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Query string form of the element.
    pub fn get_string(&self) -> String {
        if self.content.is_empty() {
            String::new()
        } else if self.prefix.is_empty() {
            self.content.clone()
        } else {
            format!("{}={}", self.prefix, self.content)
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UrlAssembler {
    config: ApiConfig,
}

impl UrlAssembler {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Mandatory `cht`/`chs` elements followed by the sorted feature groups.
    pub fn collect_url_elements<C: Chart + ?Sized>(&self, chart: &C) -> Vec<UrlElement> {
        let mut elements = vec![UrlElement::new("cht", chart.chart_type().prefix())];
        if let Some(size) = chart.size().fragment() {
            elements.push(UrlElement::new("chs", size));
        }

        let mut registry = FeatureRegistry::new();
        for source in chart.feature_sources() {
            registry.collect_from(source);
        }
        for group in registry.into_groups() {
            if RESERVED_PREFIXES.iter().any(|p| *p == group.prefix()) {
                tracing::warn!(prefix = group.prefix(), "skipping fragment for reserved parameter");
                continue;
            }
            elements.push(UrlElement::new(group.prefix(), group.content()));
        }
        elements
    }

    pub fn url<C: Chart + ?Sized>(&self, chart: &C) -> String {
        self.url_at(chart, &self.config.api_location)
    }

    /// GET URL against `api_location` instead of the configured one.
    pub fn url_at<C: Chart + ?Sized>(&self, chart: &C, api_location: &str) -> String {
        let elements = self.collect_url_elements(chart);
        let query = elements
            .iter()
            .map(UrlElement::get_string)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(AMPERSAND_SEPARATOR);
        let url = format!("{api_location}{query}");
        tracing::debug!(
            chart_type = chart.chart_type().prefix(),
            elements = elements.len(),
            len = url.len(),
            "assembled chart url"
        );
        url
    }

    pub fn url_with_format<C: Chart + ?Sized>(&self, chart: &C, format: OutputFormat) -> String {
        format!("{}{}{}", self.url(chart), AMPERSAND_SEPARATOR, format.parameter())
    }

    /// Minimal HTML form posting every element as a hidden field.
    pub fn post_request<C: Chart + ?Sized>(&self, chart: &C) -> String {
        let elements = self.collect_url_elements(chart);
        let mut form = format!(
            "<form action=\"{}\" method=\"POST\" id=\"chartForm\">",
            escape_attr(&self.config.post_location)
        );
        for element in &elements {
            form.push_str(&format!(
                "\n<input type=\"hidden\" name=\"{}\" value=\"{}\" />",
                escape_attr(element.prefix()),
                escape_attr(element.content())
            ));
        }
        form.push_str("\n<input type=\"submit\" /></form>");
        tracing::debug!(
            chart_type = chart.chart_type().prefix(),
            fields = elements.len(),
            "assembled chart post form"
        );
        form
    }

    /// Prefix to content mapping for callers building their own request.
    pub fn post_request_parameters<C: Chart + ?Sized>(&self, chart: &C) -> BTreeMap<String, String> {
        self.collect_url_elements(chart)
            .into_iter()
            .map(|e| (e.prefix, e.content))
            .collect()
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
