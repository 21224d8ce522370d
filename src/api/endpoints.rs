pub const LOGIN: &str = "/login";
pub const LOGOUT: &str = "/logout";
pub const USER: &str = "/user";
pub const COUNTRIES: &str = "/countries";
pub const VISA_REQUESTS: &str = "/visa-requests";
pub const DELETE_VISA_REQUEST: &str = "/visa-requests/delete";

pub fn visa_request(id: u64) -> String {
    format!("{}/{}", VISA_REQUESTS, id)
}

/// Public URL of a stored document.
pub fn storage_url(storage_base: &str, stored_path: &str) -> String {
    format!(
        "{}/{}",
        storage_base.trim_end_matches('/'),
        stored_path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_url_joins_without_double_slashes() {
        assert_eq!(
            storage_url("https://cdn.example.com/storage/", "/visa/p.pdf"),
            "https://cdn.example.com/storage/visa/p.pdf"
        );
    }
}
