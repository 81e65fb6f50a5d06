use futures::future::join_all;
use tracing::debug;

use crate::error::AppError;
use crate::mvu::page::{Deps, Effect, Msg, PageModel, run_effect, update};

/// Runs the MVU loop for one page: seeds with `init_msg`, runs each round of
/// loads concurrently, then builds the view once they have all settled.
///
/// # Errors
///
/// Returns the error recorded by a failed view build.
pub async fn run_page(model: &mut PageModel, init_msg: Msg, deps: Deps<'_>) -> Result<(), AppError> {
    let mut effects = update(model, init_msg);
    while !effects.is_empty() {
        debug!(page = ?model.page, effects = ?effects, "running effects");
        let snapshot: &PageModel = &*model;
        let msgs = join_all(effects.drain(..).map(|effect| run_effect(effect, snapshot, deps))).await;
        for msg in msgs {
            if let Msg::Failed(e) = &msg {
                let e = e.clone();
                update(model, msg);
                return Err(e);
            }
            effects.extend(update(model, msg));
        }
    }
    Ok(())
}
