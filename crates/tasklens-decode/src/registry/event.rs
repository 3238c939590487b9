//! Profile event condition schemas.

use super::raw::RawSpec::{Flag, Lit, Table};
use super::raw::{app, bundle, i, s, RawEntry};

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry::new("1000", "Display On", &[]),
    RawEntry::new("411", "Device Boot", &[]),
    RawEntry::new("412", "Device Shutdown", &[]),
    RawEntry::new("208", "Display Unlocked", &[]),
    RawEntry::new(
        "209",
        "Notification Click",
        &[s("arg0", Lit("Owner Application:"))],
    ),
    RawEntry::new("210", "Display Off", &[]),
    RawEntry::new("4", "Phone Ringing", &[s("arg0", Lit("Caller:"))]),
    RawEntry::new("5", "Missed Call", &[s("arg0", Lit("Caller:"))]),
    RawEntry::new("6", "Phone Idle", &[]),
    RawEntry::new(
        "7",
        "Received Text",
        &[
            i("arg0", Table("msg_type", "Type:")),
            s("arg1", Lit("Sender:")),
            s("arg2", Lit("Content:")),
        ],
    ),
    RawEntry::new(
        "8",
        "Sent Text",
        &[s("arg0", Lit("Recipient:")), s("arg1", Lit("Content:"))],
    ),
    RawEntry::new(
        "222",
        "File Modified",
        &[s("arg0", Lit("File:")), s("arg1", Lit("Event:"))],
    ),
    RawEntry::alias("221", "File Created", "222"),
    RawEntry::alias("223", "File Closed", "222"),
    RawEntry::new(
        "307",
        "Shake",
        &[
            i("arg0", Table("shake_axis", "Axis:")),
            i("arg1", Table("sensitivity", "Sensitivity:")),
            i("arg2", Table("shake_duration", "Duration:")),
        ],
    ),
    RawEntry::new(
        "450",
        "Variable Set",
        &[
            s("arg0", Lit("Variable:")),
            s("arg1", Lit("Value:")),
            i("arg2", Flag("User Only")),
        ],
    ),
    RawEntry::new("451", "Variable Cleared", &[s("arg0", Lit("Variable:"))]),
    RawEntry::new(
        "599",
        "Intent Received",
        &[
            s("arg0", Lit("Action:")),
            s("arg1", Lit("Cat:")),
            s("arg2", Lit("Scheme:")),
            s("arg3", Lit("Mime Type:")),
        ],
    ),
    RawEntry::new("203", "Battery Changed", &[]),
    RawEntry::new("2077", "Monitor Start", &[]),
    RawEntry::new("2078", "Monitor Stop", &[]),
    RawEntry::new("302", "Date/Time Set", &[]),
    RawEntry::new("303", "Timezone Changed", &[]),
    RawEntry::new(
        "305",
        "New Window",
        &[
            s("arg0", Lit("Label:")),
            i("arg1", Table("window_type", "Type:")),
        ],
    ),
    RawEntry::new(
        "461",
        "Notification",
        &[
            app("arg0", Lit("Owner Application:")),
            s("arg1", Lit("Title:")),
            s("arg2", Lit("Text:")),
        ],
    ),
    RawEntry::new(
        "462",
        "Notification Removed",
        &[
            app("arg0", Lit("Owner Application:")),
            s("arg1", Lit("Title:")),
        ],
    ),
    RawEntry::new(
        "464",
        "Clipboard Changed",
        &[s("arg0", Lit("Content:")), s("arg1", Lit("Type:"))],
    ),
    RawEntry::new(
        "465",
        "Media Button",
        &[
            i("arg0", Table("media_button", "Button:")),
            i("arg1", Flag("Grab")),
        ],
    ),
    RawEntry::new(
        "466",
        "Volume Long Press",
        &[i("arg0", Table("volume_button", "Button:"))],
    ),
    RawEntry::new("2075", "Package Updated", &[s("arg0", Lit("Package:"))]),
    RawEntry::new("2076", "Package Added", &[s("arg0", Lit("Package:"))]),
    RawEntry::new("2079", "Package Removed", &[s("arg0", Lit("Package:"))]),
    RawEntry::new(
        "2083",
        "NFC Tag",
        &[s("arg0", Lit("ID:")), s("arg1", Lit("Content:"))],
    ),
    RawEntry::new("2085", "Music Track Changed", &[]),
    RawEntry::new("2086", "Steps Taken", &[i("arg0", Lit("Number:"))]),
    RawEntry::new(
        "2087",
        "Logcat Entry",
        &[
            s("arg0", Lit("Component:")),
            s("arg1", Lit("Filter:")),
            i("arg2", Table("logcat_level", "Level:")),
        ],
    ),
    RawEntry::new("2088", "Quick Setting Clicked", &[s("arg0", Lit("Tile:"))]),
    RawEntry::new(
        "2089",
        "Received Share",
        &[s("arg0", Lit("Title:")), s("arg1", Lit("Mime Type:"))],
    ),
    RawEntry::new("2090", "Wallpaper Changed", &[]),
    RawEntry::new("1040876951", "Plugin Event", &[bundle("arg0")]),
];
