//! Reading the search form off the source page.
//!
//! A browser would hand us the live DOM. Here the page is fetched once with a
//! plain GET and everything the downloader needs is pulled out of it up
//! front, so nothing holds on to the parsed document afterwards.

use common::constants::{DEPARTMENT_SELECT_ID, LEVEL_SELECT_ID, SENTINEL_OPTION};
use common::{FormPayload, OptionEntry};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::ScrapeError;

/// What the downloader needs to know about the page it is scraping.
pub trait PageContext {
    /// Page URL without query string or fragment. Searches are posted here.
    fn current_url(&self) -> &Url;

    /// The form's fields as the browser would submit them untouched.
    fn form_fields(&self) -> FormPayload;

    /// Department options in page order, placeholder excluded.
    fn department_options(&self) -> Vec<OptionEntry>;
}

/// Element ids and the placeholder value used to locate the selects.
#[derive(Clone, Debug)]
pub struct PageIds {
    pub department_select: String,
    pub level_select: String,
    pub sentinel: String,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            department_select: DEPARTMENT_SELECT_ID.to_string(),
            level_select: LEVEL_SELECT_ID.to_string(),
            sentinel: SENTINEL_OPTION.to_string(),
        }
    }
}

/// The source page after it has been fetched and parsed.
#[derive(Clone, Debug)]
pub struct SourcePage {
    url: Url,
    fields: FormPayload,
    departments: Vec<OptionEntry>,
    levels: Vec<OptionEntry>,
}

impl SourcePage {
    pub async fn fetch(client: &reqwest::Client, url: &str, ids: &PageIds) -> Result<Self, ScrapeError> {
        let response = client.get(url).send().await?;
        let status = response.status();
        let html = response.text().await?;
        debug!(%status, bytes = html.len(), "fetched source page");

        let page = Self::parse(url, &html, ids)?;
        info!(
            url = %page.url,
            fields = page.fields.len(),
            departments = page.departments.len(),
            "read search form"
        );
        Ok(page)
    }

    pub fn parse(url: &str, html: &str, ids: &PageIds) -> Result<Self, ScrapeError> {
        let mut url = Url::parse(url)?;
        url.set_query(None);
        url.set_fragment(None);

        let document = Html::parse_document(html);

        let form = document
            .select(&selector("form")?)
            .next()
            .ok_or_else(|| ScrapeError::Page("no <form> element".to_string()))?;
        let fields = collect_fields(form)?;

        let department_select = find_select(&document, &ids.department_select)?
            .ok_or_else(|| ScrapeError::Page(format!("no select with id {}", ids.department_select)))?;
        let departments = read_options(department_select)?
            .into_iter()
            .filter(|o| o.value != ids.sentinel)
            .collect();

        let levels = match find_select(&document, &ids.level_select)? {
            Some(select) => read_options(select)?,
            None => {
                warn!(id = %ids.level_select, "level select not found on page");
                Vec::new()
            }
        };

        Ok(Self { url, fields, departments, levels })
    }

    /// Whether the level select offers `code`. Posting an unknown level is not
    /// an error, the server just returns an empty result page.
    pub fn has_level(&self, code: &str) -> bool {
        self.levels.iter().any(|l| l.value == code)
    }

    pub fn levels(&self) -> &[OptionEntry] {
        &self.levels
    }
}

impl PageContext for SourcePage {
    fn current_url(&self) -> &Url {
        &self.url
    }

    fn form_fields(&self) -> FormPayload {
        self.fields.clone()
    }

    fn department_options(&self) -> Vec<OptionEntry> {
        self.departments.clone()
    }
}

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Page(format!("bad selector {}: {:?}", css, e)))
}

fn find_select<'a>(document: &'a Html, id: &str) -> Result<Option<ElementRef<'a>>, ScrapeError> {
    let select = selector(&format!(r#"select[id="{}"]"#, id))?;
    Ok(document.select(&select).next())
}

fn option_value(option: ElementRef) -> String {
    match option.attr("value") {
        Some(value) => value.to_string(),
        None => option.text().collect::<String>().trim().to_string(),
    }
}

fn read_options(select: ElementRef) -> Result<Vec<OptionEntry>, ScrapeError> {
    let option = selector("option")?;
    Ok(select
        .select(&option)
        .map(|o| OptionEntry::new(option_value(o), o.text().collect::<String>()))
        .collect())
}

/// Collects successful controls in document order, the way form submission
/// does. Buttons are left out since only the clicked one is ever sent.
fn collect_fields(form: ElementRef) -> Result<FormPayload, ScrapeError> {
    let controls = selector("input, select, textarea")?;
    let option = selector("option")?;
    let mut fields = FormPayload::new();

    for control in form.select(&controls) {
        let name = match control.attr("name") {
            Some(n) if !n.is_empty() => n,
            _ => continue,
        };
        if control.attr("disabled").is_some() {
            continue;
        }

        match control.value().name() {
            "input" => {
                let input_type = control.attr("type").unwrap_or("text").to_lowercase();
                match input_type.as_str() {
                    "submit" | "image" | "button" | "reset" | "file" => continue,
                    "checkbox" | "radio" => {
                        if control.attr("checked").is_some() {
                            fields.append(name, control.attr("value").unwrap_or("on"));
                        }
                    }
                    _ => fields.append(name, control.attr("value").unwrap_or_default()),
                }
            }
            "select" => {
                let options: Vec<_> = control.select(&option).collect();
                let selected: Vec<_> = options
                    .iter()
                    .filter(|o| o.attr("selected").is_some())
                    .collect();
                if !selected.is_empty() {
                    for o in selected {
                        fields.append(name, option_value(*o));
                    }
                } else if control.attr("multiple").is_none() {
                    if let Some(first) = options.first() {
                        fields.append(name, option_value(*first));
                    }
                }
            }
            "textarea" => fields.append(name, control.text().collect::<String>()),
            _ => (),
        }
    }

    Ok(fields)
}
