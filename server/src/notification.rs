/// Why the server turned flight off
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisableReason {
    /// The player asked for it
    Toggled,
    /// The player lost the access right while requesting a toggle
    PermissionDenied,
    /// The leave-zone countdown ran out
    LeftZone,
}

impl DisableReason {
    pub fn notification(&self) -> Notification {
        match self {
            DisableReason::Toggled => Notification::FlightDisabled,
            DisableReason::PermissionDenied => Notification::FlightDenied,
            DisableReason::LeftZone => Notification::DisabledOutsideZone,
        }
    }
}

/// A player-facing message. The host resolves [`Notification::lang_key`]
/// through its localization table and falls back to
/// [`Notification::fallback_text`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    FlightEnabled,
    FlightDisabled,
    FlightDenied,
    DisabledOutsideZone,
    LeaveZoneWarning { seconds_left: u32 },
}

impl Notification {
    pub fn lang_key(&self) -> &'static str {
        match self {
            Notification::FlightEnabled => "zoneflight:flight_enabled",
            Notification::FlightDisabled => "zoneflight:flight_disabled",
            Notification::FlightDenied => "zoneflight:deny_flight",
            Notification::DisabledOutsideZone => "zoneflight:flight_disabled_outside_zone",
            Notification::LeaveZoneWarning { .. } => "zoneflight:leave_zone_timer",
        }
    }

    /// Positional arguments for the localized template
    pub fn args(&self) -> Vec<String> {
        match self {
            Notification::LeaveZoneWarning { seconds_left } => vec![seconds_left.to_string()],
            _ => Vec::new(),
        }
    }

    pub fn fallback_text(&self) -> String {
        match self {
            Notification::FlightEnabled => "Flight enabled!".to_string(),
            Notification::FlightDisabled => "Flight disabled!".to_string(),
            Notification::FlightDenied => "You can't fly here.".to_string(),
            Notification::DisabledOutsideZone => {
                "Flight disabled: you left the permitted zone.".to_string()
            }
            Notification::LeaveZoneWarning { seconds_left } => {
                format!("Flight will disable in {} seconds", seconds_left)
            }
        }
    }
}
