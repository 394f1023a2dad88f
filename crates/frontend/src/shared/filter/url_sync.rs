//! Синхронизация фильтров таблицы со строкой адреса

use web_sys::window;

use super::codec::{decode, encode, FilterCodecError, FilterPredicate, QueryParams};

struct Location {
    pathname: String,
    search: String,
    hash: String,
}

fn current_location() -> Option<Location> {
    let location = window()?.location();
    Some(Location {
        pathname: location.pathname().unwrap_or_default(),
        search: location.search().unwrap_or_default(),
        hash: location.hash().unwrap_or_default(),
    })
}

/// Собрать адрес: путь, параметры (если есть) и якорь
pub fn build_url(pathname: &str, params: &QueryParams, hash: &str) -> String {
    let query = params.render();
    if query.is_empty() {
        format!("{}{}", pathname, hash)
    } else {
        format!("{}?{}{}", pathname, query, hash)
    }
}

/// Параметры текущего адреса
pub fn current_params() -> QueryParams {
    current_location()
        .map(|l| QueryParams::parse(&l.search))
        .unwrap_or_default()
}

/// Слить фильтры страницы с адресом
///
/// Недопустимые фильтры страницы пропускаются с предупреждением.
pub fn merge_initial(search: &str, initial: &[FilterPredicate]) -> (QueryParams, Vec<FilterPredicate>) {
    let mut params = QueryParams::parse(search);
    if let Err(e) = encode(&mut params, initial) {
        log::warn!("initial filters ignored: {}", e);
    }
    let filters = decode(&params);
    (params, filters)
}

/// Модель фильтров по строке адреса
///
/// Второе значение `true`, если фильтры страницы надо записать в адрес.
pub fn hydrate_from_search(search: &str, initial: &[FilterPredicate]) -> (Vec<FilterPredicate>, bool) {
    if initial.is_empty() {
        return (decode(&QueryParams::parse(search)), false);
    }
    let (_, filters) = merge_initial(search, initial);
    (filters, true)
}

/// Модель фильтров при монтировании таблицы
///
/// Фильтры страницы попадают в адрес сразу, без задержки.
pub fn hydrate_filters(initial: &[FilterPredicate]) -> Vec<FilterPredicate> {
    let Some(location) = current_location() else {
        return Vec::new();
    };
    let (filters, needs_write) = hydrate_from_search(&location.search, initial);
    if needs_write {
        if let Err(e) = write_filters(&filters) {
            log::warn!("failed to write initial filters: {}", e);
        }
    }
    filters
}

/// Записать фильтры в адрес через `history.replaceState`
///
/// Путь и прочие параметры сохраняются; запись пропускается, если адрес
/// не изменился.
pub fn write_filters(predicates: &[FilterPredicate]) -> Result<(), FilterCodecError> {
    let Some(location) = current_location() else {
        return Ok(());
    };
    let mut params = QueryParams::parse(&location.search);
    encode(&mut params, predicates)?;
    let new_url = build_url(&location.pathname, &params, &location.hash);
    let current_url = format!("{}{}{}", location.pathname, location.search, location.hash);

    if new_url != current_url {
        log::debug!("filters -> {}", new_url);
        replace_url(&new_url);
    }
    Ok(())
}

fn replace_url(url: &str) {
    let Some(w) = window() else {
        return;
    };
    match w.history() {
        Ok(history) => {
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
            {
                log::warn!("history.replaceState failed for {}: {:?}", url, e);
            }
        }
        Err(e) => log::warn!("history is not available: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_initial_filters() {
        let (params, filters) = merge_initial(
            "?tab=1&filter[]=title:contains:phone",
            &[
                FilterPredicate::new("category", "equals", "phones"),
                FilterPredicate::new("title", "equals", "x"),
            ],
        );
        assert_eq!(params.get("tab"), Some("1"));
        assert_eq!(
            filters,
            vec![
                FilterPredicate::new("title", "equals", "x"),
                FilterPredicate::new("category", "equals", "phones"),
            ]
        );
    }

    #[test]
    fn test_merge_initial_skips_invalid() {
        let (_, filters) = merge_initial(
            "filter[]=title:contains:phone",
            &[FilterPredicate::new("date", "after", "10:00")],
        );
        assert_eq!(filters, vec![FilterPredicate::new("title", "contains", "phone")]);
    }

    #[test]
    fn test_hydrate_from_search() {
        let (filters, needs_write) =
            hydrate_from_search("?filter[]=title:contains:phone&filter[]=broken", &[]);
        assert_eq!(filters, vec![FilterPredicate::new("title", "contains", "phone")]);
        assert!(!needs_write);

        let (filters, needs_write) = hydrate_from_search(
            "?filter[]=title:contains:phone",
            &[FilterPredicate::new("category", "equals", "phones")],
        );
        assert_eq!(filters.len(), 2);
        assert!(needs_write);

        let (filters, needs_write) = hydrate_from_search("", &[]);
        assert!(filters.is_empty());
        assert!(!needs_write);
    }

    #[test]
    fn test_build_url() {
        let mut params = QueryParams::new();
        assert_eq!(build_url("/publication", &params, ""), "/publication");

        params.append("filter[]", "title:contains:x");
        assert_eq!(
            build_url("/publication", &params, "#top"),
            "/publication?filter%5B%5D=title%3Acontains%3Ax#top"
        );
    }
}
