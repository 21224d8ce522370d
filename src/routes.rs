use std::fmt;

use reqwest::Url;

use crate::domain::VisaType;

const PARSE_BASE: &str = "http://localhost/";

/// Destinations the front end can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Login,
    Dashboard,
    ServiceDetails(VisaType),
    ApplicationForm(VisaType),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::About => "/about".into(),
            Route::Login => "/login".into(),
            Route::Dashboard => "/dashboard".into(),
            Route::ServiceDetails(visa) => details_path(*visa).into(),
            Route::ApplicationForm(visa) => format!("/application-form?type={}", visa.as_str()),
        }
    }

    /// Resolves a path (with optional query string) to a route. Query values
    /// are percent-decoded.
    pub fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(PARSE_BASE).ok()?.join(raw.trim()).ok()?;
        let path = match url.path().trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match path {
            "/" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/login" => Some(Route::Login),
            "/dashboard" => Some(Route::Dashboard),
            "/application-form" => {
                let visa = url
                    .query_pairs()
                    .find(|(name, _)| name == "type")
                    .map(|(_, value)| value.into_owned());
                Some(Route::ApplicationForm(VisaType::from_param(visa.as_deref())))
            }
            other => VisaType::ALL
                .into_iter()
                .find(|visa| details_path(*visa) == other)
                .map(Route::ServiceDetails),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn details_path(visa: VisaType) -> &'static str {
    match visa {
        VisaType::TenYears => "/golden-visa-details",
        VisaType::FiveYears => "/retirement-visa-details",
        VisaType::RealEstate => "/property-valuation-details",
        VisaType::Family => "/dependent-visa-details",
    }
}
