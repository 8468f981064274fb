use url::form_urlencoded::byte_serialize;

use super::{Endpoint, Selection};

const BATCH_PATH: &str = "stock/market/batch";

pub(super) const fn is_batch(symbols: usize, endpoints: usize) -> bool {
    symbols > 1 || endpoints > 1
}

/// Renders `prefix` + the stock path and query for the given state.
///
/// Single endpoint: `stock/<SYM>/<kind><suffix>?<params>&<shared>`.
/// Batch: `stock/market/batch?symbols=..&types=..` followed by every kind's
/// params, then shared options with keys already emitted by an earlier kind skipped.
pub(super) fn assemble(
    prefix: &str,
    symbols: &[String],
    selections: &[(Endpoint, Selection)],
) -> String {
    let mut out = String::with_capacity(prefix.len() + 64);
    out.push_str(prefix);

    if is_batch(symbols.len(), selections.len()) {
        out.push_str(BATCH_PATH);
        out.push_str("?symbols=");
        push_joined(&mut out, symbols.iter().map(|s| encode(s)));
        out.push_str("&types=");
        push_joined(&mut out, selections.iter().map(|(e, _)| e.as_str().to_string()));

        for (_, sel) in selections {
            for (k, v) in sel.query_params.iter() {
                push_pair(&mut out, '&', k, v);
            }
        }

        let mut emitted: Vec<&str> = Vec::new();
        for (_, sel) in selections {
            for (k, v) in sel.shared_options.iter() {
                if emitted.contains(&k) {
                    continue;
                }
                emitted.push(k);
                push_pair(&mut out, '&', k, v);
            }
        }
        return out;
    }

    out.push_str("stock/");
    if let Some(symbol) = symbols.first() {
        out.push_str(&encode(symbol));
    }

    if let Some((endpoint, sel)) = selections.first() {
        out.push('/');
        out.push_str(endpoint.as_str());
        out.push_str(&sel.path_suffix);

        let mut sep = '?';
        for (k, v) in sel.query_params.iter().chain(sel.shared_options.iter()) {
            push_pair(&mut out, sep, k, v);
            sep = '&';
        }
    }

    out
}

fn encode(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}

fn push_joined(out: &mut String, items: impl Iterator<Item = String>) {
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&item);
    }
}

fn push_pair(out: &mut String, sep: char, key: &str, value: &str) {
    out.push(sep);
    out.push_str(key);
    out.push('=');
    out.push_str(value);
}
