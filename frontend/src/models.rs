// 离线构建（`mock` feature）使用的内存数据
use turntable_shared::{QuerySpec, RunRequest, SavedQuery, SavedQueryOpts};

// =============== Mock 数据 ===============

/// Saved queries the in-memory client starts with.
pub fn get_mock_saved_queries() -> Vec<SavedQuery> {
    [
        ("users:signups", "users", "SELECT count(*) FROM users WHERE created_at > now() - interval '1 day'", "{:hour [0]}"),
        ("users:active-sessions", "users", "SELECT count(*) FROM sessions WHERE expires_at > now()", "{:minute [0 15 30 45]}"),
        ("events:error-rate", "events", "SELECT kind, count(*) FROM events WHERE level = 'error' GROUP BY kind", "{:minute [0 30]}"),
    ]
    .into_iter()
    .map(|(name, db, query, period)| SavedQuery {
        query: query.to_string(),
        period: period.to_string(),
        opts: SavedQueryOpts {
            name: name.to_string(),
            db: db.to_string(),
        },
    })
    .collect()
}

/// Choices for one option, `None` for an unknown option.
pub fn get_mock_options(option: &str) -> Option<Vec<String>> {
    match option {
        "db" => Some(vec!["users".to_string(), "events".to_string(), "billing".to_string()]),
        _ => None,
    }
}

/// Tree entry the in-memory client stores for a submitted query.
pub fn saved_query_from_spec(spec: &QuerySpec) -> SavedQuery {
    SavedQuery {
        query: spec.query.clone(),
        period: spec.period.clone(),
        opts: SavedQueryOpts {
            name: spec.name.clone(),
            db: spec.db.clone(),
        },
    }
}

/// Canned test-run output echoing the request.
pub fn mock_run_output(request: &RunRequest) -> String {
    format!("[{{:db \"{}\" :query \"{}\" :rows []}}]", request.db, request.query)
}
