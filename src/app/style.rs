use eframe::egui::Color32;

/// Visual treatment for one protocol tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct LinkStyle {
    pub color: Color32,
    pub width: f32,
    /// `Some((dash, gap))` renders the link dashed, `None` solid.
    pub dash: Option<(f32, f32)>,
    pub icon: &'static str,
}

/// Map a protocol tag to its visual style.
///
/// Total: the protocol set is open, so unrecognized tags fall back to the
/// gray style instead of failing the paint pass. Called once per link per
/// frame, so it must stay pure.
pub(in crate::app) fn link_style(protocol: &str) -> LinkStyle {
    match protocol {
        "FTP" => LinkStyle {
            color: Color32::from_rgb(0, 0, 255),
            width: 2.0,
            dash: Some((4.0, 2.0)),
            icon: "📂",
        },
        "SFTP" => LinkStyle {
            color: Color32::from_rgb(0, 128, 0),
            width: 3.0,
            dash: None,
            icon: "🔒",
        },
        "HULFT" => LinkStyle {
            color: Color32::from_rgb(255, 165, 0),
            width: 2.0,
            dash: Some((8.0, 4.0)),
            icon: "📡",
        },
        "azcopy" => LinkStyle {
            color: Color32::from_rgb(128, 0, 128),
            width: 4.0,
            dash: None,
            icon: "☁️",
        },
        "MQ" => LinkStyle {
            color: Color32::from_rgb(255, 0, 0),
            width: 2.0,
            dash: Some((2.0, 2.0)),
            icon: "📨",
        },
        "HTTP" => LinkStyle {
            color: Color32::from_rgb(165, 42, 42),
            width: 2.0,
            dash: None,
            icon: "🌐",
        },
        _ => LinkStyle {
            color: Color32::from_rgb(128, 128, 128),
            width: 2.0,
            dash: None,
            icon: "❓",
        },
    }
}
