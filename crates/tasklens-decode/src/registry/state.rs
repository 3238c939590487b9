//! Profile state condition schemas.

use super::raw::RawSpec::{Flag, Lit, Table};
use super::raw::{app, bundle, i, s, RawEntry};

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry::new(
        "3",
        "Battery Level",
        &[i("arg0", Lit("From:")), i("arg1", Lit("To:"))],
    ),
    RawEntry::new(
        "4",
        "Orientation",
        &[i("arg0", Table("orientation", "Is:"))],
    ),
    RawEntry::new(
        "10",
        "Power",
        &[i("arg0", Table("power_source", "Source:"))],
    ),
    RawEntry::new(
        "30",
        "Headset Plugged",
        &[i("arg0", Table("headset", "Type:"))],
    ),
    RawEntry::new(
        "40",
        "Call",
        &[
            i("arg0", Table("state_call", "Type:")),
            s("arg1", Lit("Number:")),
        ],
    ),
    RawEntry::new("41", "Missed Call", &[s("arg0", Lit("Caller:"))]),
    RawEntry::new(
        "42",
        "Unread Text",
        &[
            i("arg0", Table("msg_type", "Type:")),
            s("arg1", Lit("Sender:")),
        ],
    ),
    RawEntry::new("100", "Airplane Mode", &[]),
    RawEntry::new("102", "Auto-Sync", &[]),
    RawEntry::new("103", "Silent Mode", &[i("arg0", Table("256", "Mode:"))]),
    RawEntry::new("104", "Do Not Disturb", &[i("arg0", Table("311", "Mode:"))]),
    RawEntry::new("110", "Docked", &[i("arg0", Table("dock", "Type:"))]),
    RawEntry::new(
        "120",
        "Display State",
        &[i("arg0", Table("display_state", "Is:"))],
    ),
    RawEntry::new("122", "Proximity Sensor", &[]),
    RawEntry::new(
        "123",
        "Display Orientation",
        &[i("arg0", Table("rotation", "Is:"))],
    ),
    RawEntry::new(
        "125",
        "Light Level",
        &[i("arg0", Lit("From:")), i("arg1", Lit("To:"))],
    ),
    RawEntry::new(
        "126",
        "Pressure",
        &[i("arg0", Lit("From:")), i("arg1", Lit("To:"))],
    ),
    RawEntry::new(
        "140",
        "Mobile Network Type",
        &[i("arg0", Table("net_type", "Type:"))],
    ),
    RawEntry::new(
        "142",
        "Signal Strength",
        &[i("arg0", Lit("From:")), i("arg1", Lit("To:"))],
    ),
    RawEntry::new("143", "Roaming", &[]),
    RawEntry::new(
        "145",
        "Cell Near",
        &[
            s("arg0", Lit("Cell Tower / Last Signal:")),
            i("arg1", Flag("Ignore Cells")),
        ],
    ),
    RawEntry::new(
        "150",
        "Application",
        &[app("arg0", Lit("")), i("arg1", Flag("Invert"))],
    ),
    RawEntry::new("151", "Task Running", &[s("arg0", Lit("Task:"))]),
    RawEntry::new("152", "Profile Active", &[s("arg0", Lit("Name:"))]),
    RawEntry::new(
        "160",
        "Wifi Connected",
        &[
            s("arg0", Lit("SSID:")),
            s("arg1", Lit("MAC:")),
            s("arg2", Lit("IP:")),
            i("arg3", Flag("Active")),
        ],
    ),
    RawEntry::new(
        "161",
        "Wifi Status",
        &[i("arg0", Table("wifi_state", "Status:"))],
    ),
    RawEntry::new("162", "Hotspot", &[]),
    RawEntry::new("163", "VPN Connected", &[]),
    RawEntry::new(
        "165",
        "Variable Value",
        &[
            s("arg0", Lit("")),
            i("arg1", Table("var_value_op", "")),
            s("arg2", Lit("")),
        ],
    ),
    RawEntry::new(
        "170",
        "Wifi Near",
        &[
            s("arg0", Lit("SSID:")),
            s("arg1", Lit("MAC:")),
            i("arg2", Lit("Min. Activate:")),
        ],
    ),
    RawEntry::new("175", "Music Active", &[i("arg0", Flag("Ignore Streams"))]),
    RawEntry::new(
        "180",
        "Charging",
        &[i("arg0", Table("charging_state", "State:"))],
    ),
    RawEntry::new("185", "Power Saving Mode", &[]),
    RawEntry::new("186", "Device Idle", &[]),
    RawEntry::new(
        "190",
        "Media Volume",
        &[i("arg0", Lit("From:")), i("arg1", Lit("To:"))],
    ),
    RawEntry::new(
        "191",
        "Ringer Volume",
        &[i("arg0", Lit("From:")), i("arg1", Lit("To:"))],
    ),
    RawEntry::new(
        "192",
        "Battery",
        &[i("arg0", Table("battery_level", "Level:"))],
    ),
    RawEntry::new(
        "193",
        "Notification Volume",
        &[i("arg0", Lit("From:")), i("arg1", Lit("To:"))],
    ),
    RawEntry::new(
        "194",
        "Custom Setting",
        &[
            i("arg0", Table("235", "Type:")),
            s("arg1", Lit("Name:")),
            s("arg2", Lit("Value:")),
        ],
    ),
    RawEntry::new(
        "235",
        "BT Connected",
        &[s("arg0", Lit("Name:")), s("arg1", Lit("Address:"))],
    ),
    RawEntry::new(
        "236",
        "BT Status",
        &[i("arg0", Table("bt_status", "Status:"))],
    ),
    RawEntry::new(
        "237",
        "BT Near",
        &[s("arg0", Lit("Name:")), s("arg1", Lit("Address:"))],
    ),
    RawEntry::new("1040876951", "Plugin State", &[bundle("arg0")]),
];
