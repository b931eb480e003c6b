use anyhow::Result;
use typed_routes::{RouteParams, RouteTemplate, SearchParams};

/// Prints the URL for a template; search values are passed as text
pub fn execute(
    template: &str,
    params: Vec<(String, String)>,
    search: Vec<(String, String)>,
) -> Result<()> {
    println!("{}", render(template, params, search)?);
    Ok(())
}

fn render(
    template: &str,
    params: Vec<(String, String)>,
    search: Vec<(String, String)>,
) -> Result<String> {
    let route = RouteTemplate::parse(template)?;
    let params: RouteParams = params.into_iter().collect();
    let search: SearchParams = search
        .into_iter()
        .map(|(key, value)| (key, Some(value)))
        .collect();

    Ok(route.build(Some(&params), Some(&search))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_renders_params_and_search() {
        let url = render(
            "/user/[id]",
            pairs(&[("id", "123")]),
            pairs(&[("sort", "asc"), ("filter", "active")]),
        )
        .unwrap();
        assert_eq!(url, "/user/123?sort=asc&filter=active");
    }

    #[test]
    fn test_missing_param_is_an_error() {
        let err = render("/user/[id]", Vec::new(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("missing value for parameter `id`"));
    }
}
