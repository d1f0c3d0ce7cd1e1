use crate::wheel::{LayoutParams, TypeId};
use std::collections::VecDeque;

/// Retained entries; older ones are dropped first.
pub const EVENT_LOG_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    TypeSelected {
        type_id: TypeId,
        previous: Option<TypeId>,
    },
    SelectionCleared {
        previous: TypeId,
    },
    ViewportResized {
        params: LayoutParams,
    },
}

impl WheelEvent {
    pub fn to_log_line(&self) -> String {
        match self {
            Self::TypeSelected { type_id, previous } => match previous {
                Some(previous) => format!("type_selected type={type_id} previous={previous}"),
                None => format!("type_selected type={type_id}"),
            },
            Self::SelectionCleared { previous } => {
                format!("selection_cleared previous={previous}")
            }
            Self::ViewportResized { params } => format!(
                "viewport_resized width={:.0} height={:.0}",
                params.width, params.height
            ),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct WheelEventLog {
    entries: VecDeque<WheelEvent>,
}

impl WheelEventLog {
    pub fn entries(&self) -> &VecDeque<WheelEvent> {
        &self.entries
    }

    pub fn push(&mut self, event: WheelEvent) {
        if self.entries.len() == EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(event);
    }
}
