use crate::action::{Action, ControlSignal};
use crate::host::Host;
use crate::stack::{Context, Family, ViewportStage};

use super::{MenuEngine, Tick};

impl MenuEngine {
    /// Two-step rectangle capture: place the upper-left corner, then the
    /// lower-right one. Every edit is applied to the video collaborator
    /// immediately; leaving the dialog is the only "commit".
    pub(crate) fn viewport_tick(&mut self, mut action: Action, host: &mut Host<'_>) -> Tick {
        let stage = match self.stack.top().context {
            Context::Viewport(stage) => stage,
            _ => return Tick::Done(ControlSignal::Continue),
        };
        if self.need_refresh {
            action = Action::Noop;
        }

        let mut rect = host.session.viewport;
        let mut edited = true;
        match (stage, action) {
            // First corner: move the origin, holding the far edge in place.
            (ViewportStage::UpperLeft, Action::Up) => {
                rect.y -= 1;
                rect.height += 1;
            }
            (ViewportStage::UpperLeft, Action::Down) => {
                rect.y += 1;
                rect.height -= 1;
            }
            (ViewportStage::UpperLeft, Action::Left) => {
                rect.x -= 1;
                rect.width += 1;
            }
            (ViewportStage::UpperLeft, Action::Right) => {
                rect.x += 1;
                rect.width -= 1;
            }
            // Second corner: the origin is anchored, only the size moves.
            (ViewportStage::LowerRight, Action::Up) => rect.height -= 1,
            (ViewportStage::LowerRight, Action::Down) => rect.height += 1,
            (ViewportStage::LowerRight, Action::Left) => rect.width -= 1,
            (ViewportStage::LowerRight, Action::Right) => rect.width += 1,
            (ViewportStage::UpperLeft, Action::Start) => {
                rect.width += rect.x;
                rect.height += rect.y;
                rect.x = 0;
                rect.y = 0;
            }
            (ViewportStage::LowerRight, Action::Start) => {
                let full = host.platform.default_viewport();
                rect.width = full.width - rect.x;
                rect.height = full.height - rect.y;
            }
            (ViewportStage::UpperLeft, Action::Ok) => {
                edited = false;
                if let Some(saved) = self.stack.pop() {
                    self.stack
                        .push("", Context::Viewport(ViewportStage::LowerRight), saved);
                }
            }
            (ViewportStage::LowerRight, Action::Ok)
            | (_, Action::Cancel)
            | (_, Action::Menu) => {
                edited = false;
                if self.pop_level() {
                    self.need_refresh = true;
                }
            }
            _ => edited = false,
        }

        if edited {
            host.session.viewport = rect;
            host.video.apply_viewport(rect);
        }

        self.populate_if_needed(host, Family::Viewport);
        Tick::Done(ControlSignal::Continue)
    }
}
