//! One console action per CLI invocation: run it, collect what it
//! shows, and decide the exit status.

use crate::console::{Confirm, Console, ResultSlot};
use crate::output::{OutputRenderer, UserListView};

/// Console actions reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Create,
    Update,
    Delete,
    Health,
}

impl Action {
    fn slot(self) -> Option<ResultSlot> {
        match self {
            Action::List => None,
            Action::Get => Some(ResultSlot::Get),
            Action::Create => Some(ResultSlot::Create),
            Action::Update => Some(ResultSlot::Update),
            Action::Delete => Some(ResultSlot::Delete),
            Action::Health => Some(ResultSlot::Health),
        }
    }

    fn mutates(self) -> bool {
        matches!(self, Action::Create | Action::Update | Action::Delete)
    }
}

/// Rendered blocks to print and whether the action succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub blocks: Vec<String>,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.success { 0 } else { 1 }
    }
}

/// Run `action` against the console's current forms.
///
/// `list` fails when the list cannot be loaded. Other actions fail when
/// their result panel is an error. A declined delete shows nothing and
/// succeeds. Successful mutations also render the refreshed list.
pub async fn run_action<C: Confirm>(
    console: &mut Console<C>,
    action: Action,
    renderer: &dyn OutputRenderer,
) -> Outcome {
    match action {
        Action::List => console.load_users().await,
        Action::Get => console.get_user().await,
        Action::Create => console.create_user().await,
        Action::Update => console.update_user().await,
        Action::Delete => console.delete_user().await,
        Action::Health => console.check_health().await,
    }

    let users = || renderer.render_users(console.users(), console.messages());

    let Some(slot) = action.slot() else {
        return Outcome {
            success: !matches!(console.users(), UserListView::Error(_)),
            blocks: vec![users()],
        };
    };
    let Some(panel) = console.panel(slot) else {
        return Outcome {
            success: true,
            blocks: Vec::new(),
        };
    };

    let success = !panel.is_error;
    let mut blocks = vec![renderer.render_result(panel)];
    if success && action.mutates() {
        blocks.push(users());
    }
    Outcome { success, blocks }
}
