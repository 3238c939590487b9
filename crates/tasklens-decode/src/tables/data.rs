//! Built-in lookup table data.
//!
//! Numeric ids are the code of the action that owns the table; named ids are
//! shared between several actions or condition records.

pub(super) const TABLES: &[(&str, &[&str])] = &[
    ("on_off_toggle", &["Off", "On", "Toggle"]),
    ("175", &["Normal", "Battery Saver", "Toggle"]),
    (
        "905",
        &["Off", "Device Only", "Battery Saving", "High Accuracy"],
    ),
    ("256", &["Off", "Vibrate", "On"]),
    (
        "311",
        &["Allow All", "Priority", "Alarms", "Nothing", "Custom"],
    ),
    (
        "443",
        &[
            "Next",
            "Pause",
            "Previous",
            "Toggle Pause",
            "Stop",
            "Play",
            "Rewind",
            "Fast Forward",
        ],
    ),
    ("348", &["Normal", "Recovery", "Bootloader", "Shutdown"]),
    ("109", &["Home", "Lock", "Both"]),
    (
        "47",
        &[
            "Overlay",
            "Overlay, Blocking",
            "Overlay, Blocking, Full Window",
            "Dialog",
            "Dialog, Dim Behind Heavy",
            "Dialog, Dim Behind",
            "Activity",
            "Activity, No Bar",
            "Activity, No Status",
            "Activity, No Bar, No Status, No Nav",
        ],
    ),
    (
        "stream",
        &["Call", "System", "Ringer", "Media", "Alarm", "Notification"],
    ),
    (
        "523_priority",
        &["None", "Min", "Low", "Default", "High", "Max"],
    ),
    (
        "342",
        &[
            "Type",
            "Exists",
            "Readable",
            "Writeable",
            "Modified",
            "Size",
            "Directory Contents",
            "Parent",
            "Name",
            "Full Path",
        ],
    ),
    (
        "412_sort",
        &[
            "Alphabetic",
            "Alphabetic Reversed",
            "Size",
            "Size Reversed",
            "Modification Date",
            "Modification Date Reversed",
        ],
    ),
    (
        "339_method",
        &[
            "GET", "POST", "HEAD", "PUT", "PATCH", "DELETE", "OPTIONS", "TRACE",
        ],
    ),
    ("877_target", &["Broadcast Receiver", "Activity", "Service"]),
    (
        "369",
        &[
            "Remove Duplicates",
            "Reverse",
            "Rotate Left",
            "Rotate Right",
            "Shuffle",
            "Sort Alpha",
            "Sort Alpha, Reverse",
            "Sort Alpha Caseless",
            "Sort Alpha Caseless, Reverse",
            "Sort Shortest First",
            "Sort Longest First",
            "Sort Numeric, Integer",
            "Sort Numeric, Floating-Point",
            "Squash",
        ],
    ),
    (
        "596",
        &[
            "Bytes to Kilobytes",
            "Bytes to Megabytes",
            "Bytes to Gigabytes",
            "Date Time to Seconds",
            "Seconds to Date Time",
            "Seconds to Medium Date Time",
            "Seconds to Long Date Time",
            "HTML to Text",
            "Celsius to Fahrenheit",
            "Fahrenheit to Celsius",
            "Centimetres to Inches",
            "Inches to Centimetres",
            "Metres to Feet",
            "Feet to Metres",
            "Kilograms to Pounds",
            "Pounds to Kilograms",
            "Kilometres to Miles",
            "Miles to Kilometres",
            "URL Decode",
            "URL Encode",
            "Binary to Decimal",
            "Decimal to Binary",
            "Hex to Decimal",
            "Decimal to Hex",
            "Base64 Encode",
            "Base64 Decode",
            "To MD5 Digest",
            "To SHA1 Digest",
            "To Lower Case",
            "To Upper Case",
            "To Uppercase First",
        ],
    ),
    (
        "394_input",
        &[
            "Now (Current Date And Time)",
            "Milliseconds Since Epoch",
            "Seconds Since Epoch",
            "ISO 8601",
            "Custom",
        ],
    ),
    ("295", &["Connect", "Disconnect", "Pair", "Unpair (Forget)"]),
    ("101", &["Rear", "Front"]),
    ("235", &["Global", "Secure", "System"]),
    ("378", &["Select Single Item", "Multiple Choices"]),
    ("396", &["Simple", "Regex"]),
    ("119", &["Point", "Navigate To", "Search"]),
    ("909", &["Contacts", "Call Log", "Favourites"]),
    ("989", &["Off", "On", "Toggle", "Automatic"]),
    (
        "820",
        &[
            "Never",
            "With AC Power",
            "With USB Power",
            "With AC or USB Power",
            "With Wireless Power",
            "With Any Power",
        ],
    ),
    ("512", &["Expanded", "Collapsed", "Toggle"]),
    (
        "426",
        &[
            "Connect",
            "Disconnect",
            "Reassociate",
            "Reconnect",
            "Enable",
            "Disable",
            "Forget",
        ],
    ),
    (
        "341",
        &[
            "Connection Type",
            "Mobile Data",
            "Wifi",
            "Net",
            "Any Data",
            "Bluetooth",
        ],
    ),
    ("903", &["Free Form", "Web Search"]),
    (
        "525",
        &["Red", "Green", "Blue", "Cyan", "Magenta", "Yellow", "White"],
    ),
    (
        "457_source",
        &[
            "Default",
            "Mic",
            "Call Outgoing",
            "Call Incoming",
            "Call",
            "Camcorder",
            "Voice Recognition",
        ],
    ),
    ("457_codec", &["AMR Narrowband", "AMR Wideband", "AAC"]),
    ("457_format", &["3GPP", "MP4", "RAW AMR", "AAC"]),
    (
        "185",
        &[
            "Black and White",
            "Greyscale",
            "Alpha",
            "Sepia",
            "Invert",
            "Blur",
        ],
    ),
    ("189", &["Left", "Right"]),
    ("190", &["Horizontal", "Vertical"]),
    ("667", &["URI Formatted", "Raw"]),
    ("941", &["OAuth 2.0", "Basic"]),
    (
        "59",
        &[
            "Load URL",
            "Go Back",
            "Go Forward",
            "Reload",
            "Stop",
            "Zoom In",
            "Zoom Out",
            "Clear Cache",
            "Clear History",
        ],
    ),
    (
        "195",
        &[
            "Element Value",
            "Element Position",
            "Element Size",
            "Element Text",
            "Element Visible",
            "Scene Status",
        ],
    ),
    ("portrait_landscape", &["Portrait", "Landscape"]),
    (
        "rotation",
        &[
            "Auto",
            "Portrait",
            "Landscape",
            "Reverse Portrait",
            "Reverse Landscape",
        ],
    ),
    ("power_source", &["Any", "AC", "USB", "Wireless"]),
    ("headset", &["Any", "With Microphone", "Without Microphone"]),
    (
        "orientation",
        &[
            "Portrait",
            "Landscape",
            "Face Up",
            "Face Down",
            "Standing Up",
            "Upside Down",
        ],
    ),
    ("display_state", &["Off", "On", "Unlocked"]),
    ("dock", &["Any", "Desk", "Car"]),
    ("net_type", &["Any", "2G", "3G", "4G", "5G"]),
    (
        "var_value_op",
        &[
            "Equals",
            "Not Equals",
            "Matches",
            "Doesn't Match",
            "Matches Regex",
            "Doesn't Match Regex",
            "Less Than",
            "Greater Than",
            "Is Set",
            "Not Set",
        ],
    ),
    ("state_call", &["Any", "Incoming", "Outgoing"]),
    ("msg_type", &["Any", "SMS", "MMS"]),
    (
        "shake_axis",
        &["Left-Right", "Up-Down", "Backwards-Forwards"],
    ),
    (
        "sensitivity",
        &["Very Low", "Low", "Medium", "High", "Very High"],
    ),
    (
        "shake_duration",
        &["Very Short", "Short", "Medium", "Long", "Very Long"],
    ),
    ("battery_level", &["Empty", "Low", "Medium", "High", "Full"]),
    (
        "charging_state",
        &["Unknown", "Charging", "Discharging", "Not Charging", "Full"],
    ),
    ("bt_status", &["Off", "On", "Turning On", "Turning Off"]),
    (
        "wifi_state",
        &["Disabled", "Enabling", "Enabled", "Disabling", "Connected"],
    ),
    (
        "window_type",
        &["Any", "Activity", "Dialog", "Dialog Or Activity"],
    ),
    (
        "media_button",
        &[
            "Play",
            "Pause",
            "Play/Pause",
            "Stop",
            "Next",
            "Previous",
            "Any",
        ],
    ),
    ("volume_button", &["Volume Up", "Volume Down", "Any"]),
    (
        "logcat_level",
        &["Verbose", "Debug", "Info", "Warning", "Error"],
    ),
];
