use crate::{common::DPI_SLOT_COUNT, error::DriverError, settings::DeviceSettings};

#[derive(PartialEq, Clone, Copy, Debug)]
pub(crate) enum Section {
    Dpi, Performance, Power, Configuration,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub(crate) enum TaskKind {
    Apply,
    QueryCharge,
}

/// Sent back from a driver thread exactly once.
#[derive(Debug)]
pub(crate) struct TaskOutcome {
    pub(crate) kind: TaskKind,
    pub(crate) result: Result<String, DriverError>,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub(crate) enum NoticeKind {
    Info,
    Error,
}

/// A blocking message box.
#[derive(Clone, Debug)]
pub(crate) struct Notice {
    pub(crate) kind: NoticeKind,
    pub(crate) title: String,
    pub(crate) message: String,
}

impl Notice {
    pub(crate) fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, title: title.into(), message: message.into() }
    }

    pub(crate) fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.into(), message: message.into() }
    }
}

/// Text typed into the DPI entries. A draft that does not parse leaves the
/// slot value alone and is flagged `invalid` until corrected.
pub(crate) struct DpiDrafts {
    pub(crate) text: [String; DPI_SLOT_COUNT],
    pub(crate) invalid: [bool; DPI_SLOT_COUNT],
}

impl DpiDrafts {
    pub(crate) fn from_settings(settings: &DeviceSettings) -> Self {
        let mut text: [String; DPI_SLOT_COUNT] = Default::default();
        for (slot, value) in settings.dpi_slots() {
            text[slot - 1] = value.to_string();
        }

        Self { text, invalid: [false; DPI_SLOT_COUNT] }
    }
}
