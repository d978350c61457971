//! Request dispatch: `/` (form page) and `/history` (JSON).

use phishcheck_core::service::PhishChecker;

use super::page::{self, PageView};
use super::request::Request;
use super::response::Response;

pub fn route(req: &Request, checker: &PhishChecker) -> Response {
    match (req.path.as_str(), req.method.as_str()) {
        ("/", "GET") => {
            let history = checker.history();
            Response::html(page::render(&PageView {
                url: "",
                verdict: None,
                history: &history,
            })
            .into_string())
        }
        ("/", "POST") => {
            let raw = req.form_field("url").unwrap_or_default();
            let url = raw.trim();
            let verdict = checker.check(url);
            let history = checker.history();
            Response::html(page::render(&PageView {
                url,
                verdict: Some(&verdict),
                history: &history,
            })
            .into_string())
        }
        ("/", _) => Response::method_not_allowed("GET, POST"),
        ("/history", "GET") => match checker.history_payload().to_json() {
            Ok(body) => Response::json(body),
            Err(e) => {
                tracing::warn!("serialize history: {:#}", e);
                Response::internal_error()
            }
        },
        ("/history", _) => Response::method_not_allowed("GET"),
        _ => Response::not_found(),
    }
}
