//! Task action schemas.

use super::raw::RawSpec::{self, Flag, Lit, Pairs, Plain, Table};
use super::raw::{app, bundle, cond, i, img, s, RawEntry};

const TOGGLE: RawSpec = Table("on_off_toggle", "Set:");

const GOTO_TYPE: &[(&str, &str)] = &[
    ("0", "Action Number"),
    ("1", "Action Label"),
    ("2", "Top of Loop"),
    ("3", "End of Loop"),
    ("4", "End of If"),
];

const WAIT_UNITS: &[(&str, &str)] = &[("0", "ms"), ("1", "s"), ("2", "m"), ("3", "h"), ("4", "d")];

const PRIORITY: RawSpec = Pairs(
    "Priority:",
    &[("0", "0"), ("1", "1"), ("2", "2"), ("3", "3"), ("4", "4"), ("5", "5")],
);

pub(super) const ENTRIES: &[RawEntry] = &[
    // Control flow
    RawEntry::new("37", "If", &[cond("if")]),
    RawEntry::new("38", "End If", &[]),
    RawEntry::new("43", "Else", &[cond("if")]),
    RawEntry::new(
        "39",
        "For",
        &[s("arg0", Lit("Variable:")), s("arg1", Lit("Items:"))],
    ),
    RawEntry::new("40", "End For", &[]),
    RawEntry::new(
        "135",
        "Goto",
        &[
            i("arg0", Pairs("Type:", GOTO_TYPE)),
            i("arg1", Lit("Number:")),
            s("arg2", Lit("Label:")),
        ],
    ),
    RawEntry::new(
        "137",
        "Stop",
        &[i("arg0", Flag("With Error")), s("arg1", Lit("Task:"))],
    ),
    RawEntry::new(
        "30",
        "Wait",
        &[
            i("arg0", Lit("MS:")),
            i("arg1", Lit("Seconds:")),
            i("arg2", Lit("Minutes:")),
            i("arg3", Lit("Hours:")),
            i("arg4", Lit("Days:")),
        ],
    ),
    RawEntry::new(
        "35",
        "Wait Until",
        &[
            i("arg0", Lit("Check Every:")),
            i("arg1", Pairs("Unit:", WAIT_UNITS)),
            cond("if"),
        ],
    ),
    RawEntry::new(
        "130",
        "Perform Task",
        &[
            s("arg0", Lit("Name:")),
            i("arg1", PRIORITY),
            s("arg2", Lit("Parameter 1 (%par1):")),
            s("arg3", Lit("Parameter 2 (%par2):")),
            s("arg4", Lit("Return Value Variable:")),
            i("arg5", Flag("Stop")),
        ],
    ),
    RawEntry::new(
        "126",
        "Return",
        &[s("arg0", Lit("Value:")), i("arg1", Flag("Stop"))],
    ),
    RawEntry::new(
        "159",
        "Profile Status",
        &[s("arg0", Lit("Name:")), i("arg1", TOGGLE)],
    ),
    RawEntry::new("365", "Tasker Function", &[s("arg0", Lit("Function:"))]),
    RawEntry::new("139", "Disable Tasker", &[]),
    RawEntry::new("300", "Anchor", &[]),
    // Scripting
    RawEntry::new(
        "129",
        "JavaScriptlet",
        &[
            s("arg0", Lit("Code:\n")),
            i("arg1", Flag("Auto Exit")),
            s("arg2", Lit("Libraries:")),
            i("arg3", Lit("Timeout (Seconds):")),
        ],
    ),
    RawEntry::new(
        "131",
        "JavaScript",
        &[
            s("arg0", Lit("Path:")),
            s("arg1", Lit("Libraries:")),
            i("arg2", Flag("Auto Exit")),
            i("arg3", Lit("Timeout (Seconds):")),
        ],
    ),
    RawEntry::new(
        "664",
        "Java Function",
        &[
            s("arg0", Lit("Return:")),
            s("arg1", Lit("Class Or Object:")),
            s("arg2", Lit("Function:")),
            s("arg3", Lit("Param:")),
            s("arg4", Lit("Param:")),
        ],
    ),
    RawEntry::new(
        "123",
        "Run Shell",
        &[
            s("arg0", Lit("Command:")),
            i("arg1", Lit("Timeout (Seconds):")),
            i("arg2", Flag("Use Root")),
            s("arg3", Lit("Store Output In:")),
            s("arg4", Lit("Store Errors In:")),
            s("arg5", Lit("Store Result In:")),
        ],
    ),
    RawEntry::new(
        "667",
        "SQL Query",
        &[
            i("arg0", Table("667", "Mode:")),
            s("arg1", Lit("File:")),
            s("arg2", Lit("Table:")),
            s("arg3", Lit("Columns:")),
            s("arg4", Lit("Query:")),
            s("arg5", Lit("Selection Parameters:")),
            s("arg6", Lit("Order By:")),
            s("arg7", Lit("Output Column Divider:")),
            s("arg8", Lit("Variable Array:")),
        ],
    ),
    // Variables
    RawEntry::new(
        "547",
        "Variable Set",
        &[
            s("arg0", Lit("Name:")),
            s("arg1", Lit("To:")),
            i("arg2", Flag("Recurse Variables")),
            i("arg3", Flag("Do Maths")),
            i("arg4", Flag("Append")),
            i("arg5", Lit("Max Rounding Digits:")),
        ],
    ),
    RawEntry::new(
        "548",
        "Flash",
        &[s("arg0", Lit("")), i("arg1", Flag("Long"))],
    ),
    RawEntry::new(
        "549",
        "Variable Clear",
        &[
            s("arg0", Lit("Name:")),
            i("arg1", Flag("Pattern Matching")),
            i("arg2", Flag("Local Variables Only")),
        ],
    ),
    RawEntry::new(
        "550",
        "Popup",
        &[
            s("arg0", Lit("Title:")),
            s("arg1", Lit("Text:")),
            img("arg2", Plain),
            s("arg3", Lit("Layout:")),
            i("arg4", Lit("Timeout (Seconds):")),
            i("arg5", Flag("Show Over Keyguard")),
        ],
    ),
    RawEntry::new(
        "590",
        "Variable Split",
        &[
            s("arg0", Lit("Name:")),
            s("arg1", Lit("Splitter:")),
            i("arg2", Flag("Delete Base")),
        ],
    ),
    RawEntry::new(
        "592",
        "Variable Join",
        &[
            s("arg0", Lit("Name:")),
            s("arg1", Lit("Joiner:")),
            i("arg2", Flag("Delete Parts")),
        ],
    ),
    RawEntry::new(
        "595",
        "Variable Search Replace",
        &[
            s("arg0", Lit("Variable:")),
            s("arg1", Lit("Search:")),
            i("arg2", Flag("Ignore Case")),
            i("arg3", Flag("Multi-Line")),
            i("arg4", Flag("One Match Only")),
            s("arg5", Lit("Store Matches In Array:")),
            i("arg6", Flag("Replace Matches")),
            s("arg7", Lit("Replace With:")),
        ],
    ),
    RawEntry::new(
        "596",
        "Variable Convert",
        &[
            s("arg0", Lit("Name:")),
            i("arg1", Table("596", "Function:")),
            s("arg2", Lit("Store Result In:")),
        ],
    ),
    RawEntry::new(
        "597",
        "Variable Section",
        &[
            s("arg0", Lit("Name:")),
            i("arg1", Lit("From:")),
            i("arg2", Lit("Length:")),
            i("arg3", Flag("Adapt To Fit")),
            s("arg4", Lit("Store Result In:")),
        ],
    ),
    RawEntry::new(
        "888",
        "Variable Add",
        &[
            s("arg0", Lit("Name:")),
            i("arg1", Lit("Value:")),
            i("arg2", Lit("Wrap Around:")),
        ],
    ),
    RawEntry::alias("890", "Variable Subtract", "888"),
    RawEntry::new(
        "545",
        "Variable Randomize",
        &[
            s("arg0", Lit("Name:")),
            i("arg1", Lit("Min:")),
            i("arg2", Lit("Max:")),
        ],
    ),
    RawEntry::new(
        "389",
        "Multiple Variables Set",
        &[
            s("arg0", Lit("Names:")),
            s("arg1", Lit("Variable Names Splitter:")),
            s("arg2", Lit("Values Splitter:")),
            i("arg3", Flag("Do Maths")),
        ],
    ),
    RawEntry::new(
        "396",
        "Simple Match/Regex",
        &[
            i("arg0", Table("396", "Type:")),
            s("arg1", Lit("Text:")),
            s("arg2", Lit("Match:")),
        ],
    ),
    // Arrays and dates
    RawEntry::new(
        "354",
        "Array Set",
        &[
            s("arg0", Lit("Variable Array:")),
            s("arg1", Lit("Values:")),
            s("arg2", Lit("Splitter:")),
        ],
    ),
    RawEntry::new(
        "355",
        "Array Push",
        &[
            s("arg0", Lit("Variable Array:")),
            i("arg1", Lit("Position:")),
            s("arg2", Lit("Value:")),
            i("arg3", Flag("Fill Spaces")),
        ],
    ),
    RawEntry::new(
        "356",
        "Array Pop",
        &[
            s("arg0", Lit("Variable Array:")),
            i("arg1", Lit("Position:")),
            s("arg2", Lit("To Var:")),
        ],
    ),
    RawEntry::new("357", "Array Clear", &[s("arg0", Lit("Variable Array:"))]),
    RawEntry::new(
        "369",
        "Array Process",
        &[
            s("arg0", Lit("Variable Array:")),
            i("arg1", Table("369", "Type:")),
        ],
    ),
    RawEntry::new(
        "394",
        "Parse/Format DateTime",
        &[
            i("arg0", Table("394_input", "Input Type:")),
            s("arg1", Lit("Input:")),
            s("arg2", Lit("Input Format:")),
            s("arg3", Lit("Output Format:")),
            s("arg4", Lit("Output Offset Type:")),
        ],
    ),
    // Apps
    RawEntry::new(
        "18",
        "Kill App",
        &[app("arg0", Plain), s("arg1", Lit("Package:"))],
    ),
    RawEntry::new(
        "20",
        "Launch App",
        &[
            app("arg0", Plain),
            s("arg1", Lit("Data:")),
            i("arg2", Flag("Exclude From Recent Apps")),
            i("arg3", Flag("Always Start New Copy")),
        ],
    ),
    RawEntry::new("22", "Load Last App", &[]),
    RawEntry::new("25", "Go Home", &[i("arg0", Lit("Page:"))]),
    RawEntry::new(
        "104",
        "Browse URL",
        &[s("arg0", Lit("URL:")), app("arg1", Plain)],
    ),
    RawEntry::new("100", "Search", &[s("arg0", Lit("Text:"))]),
    RawEntry::new(
        "119",
        "Open Map",
        &[i("arg0", Table("119", "Mode:")), s("arg1", Lit("Address:"))],
    ),
    RawEntry::new(
        "877",
        "Send Intent",
        &[
            s("arg0", Lit("Action:")),
            s("arg1", Lit("Cat:")),
            s("arg2", Lit("Mime Type:")),
            s("arg3", Lit("Data:")),
            s("arg4", Lit("Extra:")),
            s("arg5", Lit("Extra:")),
            s("arg6", Lit("Package:")),
            s("arg7", Lit("Class:")),
            i("arg8", Table("877_target", "Target:")),
        ],
    ),
    RawEntry::new(
        "105",
        "Set Clipboard",
        &[s("arg0", Lit("Text:")), i("arg1", Flag("Add"))],
    ),
    RawEntry::new(
        "567",
        "Calendar Insert",
        &[
            s("arg0", Lit("Title:")),
            s("arg1", Lit("Description:")),
            s("arg2", Lit("Location:")),
            i("arg3", Flag("All Day")),
            s("arg4", Lit("Start:")),
            i("arg5", Lit("Duration (Mins):")),
        ],
    ),
    RawEntry::new("909", "Contacts", &[i("arg0", Table("909", "Type:"))]),
    RawEntry::new(
        "804",
        "Input Method Select",
        &[s("arg0", Lit("Input Method:"))],
    ),
    // Net
    RawEntry::new(
        "339",
        "HTTP Request",
        &[
            i("arg0", Table("339_method", "Method:")),
            s("arg1", Lit("URL:")),
            s("arg2", Lit("Headers:")),
            s("arg3", Lit("Query Parameters:")),
            s("arg4", Lit("Body:")),
            s("arg5", Lit("File To Send:")),
            s("arg6", Lit("File/Directory To Save With Output:")),
            i("arg7", Lit("Timeout (Seconds):")),
            i("arg8", Flag("Trust Any Certificate")),
        ],
    ),
    RawEntry::new(
        "118",
        "HTTP Get",
        &[
            s("arg0", Lit("Server:Port:")),
            s("arg1", Lit("Path:")),
            s("arg2", Lit("Attributes:")),
            s("arg3", Lit("Cookies:")),
            s("arg4", Lit("User Agent:")),
            i("arg5", Lit("Timeout:")),
            s("arg6", Lit("Mime Type:")),
            s("arg7", Lit("Output File:")),
        ],
    ),
    RawEntry::alias("117", "HTTP Head", "118"),
    RawEntry::new(
        "116",
        "HTTP Post",
        &[
            s("arg0", Lit("Server:Port:")),
            s("arg1", Lit("Path:")),
            s("arg2", Lit("Data / File:")),
            s("arg3", Lit("Cookies:")),
            s("arg4", Lit("User Agent:")),
            i("arg5", Lit("Timeout:")),
            s("arg6", Lit("Content Type:")),
            s("arg7", Lit("Output File:")),
        ],
    ),
    RawEntry::new(
        "941",
        "HTTP Auth",
        &[
            i("arg0", Table("941", "Method:")),
            s("arg1", Lit("Client ID:")),
            s("arg2", Lit("Client Secret:")),
            s("arg3", Lit("Endpoint To Get Code:")),
            s("arg4", Lit("Endpoint To Get Token:")),
            s("arg5", Lit("Scopes:")),
        ],
    ),
    RawEntry::new(
        "341",
        "Test Net",
        &[
            i("arg0", Table("341", "Type:")),
            s("arg1", Lit("Store Result In:")),
        ],
    ),
    RawEntry::new("425", "WiFi", &[i("arg0", TOGGLE)]),
    RawEntry::new(
        "426",
        "WiFi Net Control",
        &[i("arg0", Table("426", "Action:")), s("arg1", Lit("SSID:"))],
    ),
    RawEntry::new("294", "Bluetooth", &[i("arg0", TOGGLE)]),
    RawEntry::new(
        "295",
        "Bluetooth Connection",
        &[
            i("arg0", Table("295", "Action:")),
            s("arg1", Lit("Device:")),
        ],
    ),
    RawEntry::new("296", "Bluetooth Voice", &[i("arg0", TOGGLE)]),
    RawEntry::new("333", "Airplane Mode", &[i("arg0", TOGGLE)]),
    RawEntry::new("323", "Airplane Radios", &[s("arg0", Lit("Radios:"))]),
    RawEntry::new("325", "Mobile Data", &[i("arg0", TOGGLE)]),
    RawEntry::new("331", "Auto-Sync", &[i("arg0", TOGGLE)]),
    RawEntry::new("113", "Wifi Tether", &[i("arg0", TOGGLE)]),
    RawEntry::new("114", "USB Tether", &[i("arg0", TOGGLE)]),
    RawEntry::new("458", "NFC", &[i("arg0", TOGGLE)]),
    // Phone and messaging
    RawEntry::new(
        "41",
        "Send SMS",
        &[
            s("arg0", Lit("Number:")),
            s("arg1", Lit("Message:")),
            i("arg2", Flag("Store In Messaging App")),
        ],
    ),
    RawEntry::new(
        "42",
        "Send Data SMS",
        &[
            s("arg0", Lit("Number:")),
            i("arg1", Lit("Port:")),
            s("arg2", Lit("Data:")),
        ],
    ),
    RawEntry::new(
        "250",
        "Compose SMS",
        &[s("arg0", Lit("To:")), s("arg1", Lit("Message:"))],
    ),
    RawEntry::new(
        "111",
        "Compose MMS",
        &[
            s("arg0", Lit("To:")),
            s("arg1", Lit("Subject:")),
            s("arg2", Lit("Message:")),
            s("arg3", Lit("Attachment:")),
        ],
    ),
    RawEntry::new(
        "125",
        "Compose Email",
        &[
            s("arg0", Lit("To:")),
            s("arg1", Lit("Subject:")),
            s("arg2", Lit("Message:")),
        ],
    ),
    RawEntry::new(
        "90",
        "Call",
        &[s("arg0", Lit("Number:")), i("arg1", Flag("Auto Dial"))],
    ),
    RawEntry::new(
        "95",
        "Call Block",
        &[s("arg0", Lit("Numbers:")), i("arg1", Flag("Info"))],
    ),
    RawEntry::new(
        "97",
        "Call Divert",
        &[
            s("arg0", Lit("From Match:")),
            s("arg1", Lit("To:")),
            i("arg2", Flag("Info")),
        ],
    ),
    RawEntry::new("99", "Call Revert", &[s("arg0", Lit("Numbers:"))]),
    RawEntry::new("733", "End Call", &[]),
    RawEntry::new("254", "Speakerphone", &[i("arg0", TOGGLE)]),
    RawEntry::new("301", "Mic Mute", &[i("arg0", TOGGLE)]),
    RawEntry::new(
        "559",
        "Say",
        &[
            s("arg0", Lit("Text:")),
            s("arg1", Lit("Engine:Voice:")),
            i("arg2", Table("stream", "Stream:")),
            i("arg3", Lit("Pitch:")),
            i("arg4", Lit("Speed:")),
            i("arg5", Flag("Respect Audio Focus")),
            i("arg6", Flag("Network")),
            i("arg7", Flag("Continue Task Immediately")),
        ],
    ),
    RawEntry::new(
        "699",
        "Say To File",
        &[
            s("arg0", Lit("Text:")),
            s("arg1", Lit("Engine:Voice:")),
            s("arg2", Lit("File:")),
            i("arg3", Lit("Pitch:")),
            i("arg4", Lit("Speed:")),
        ],
    ),
    RawEntry::new("697", "Shut Up", &[]),
    RawEntry::new(
        "903",
        "Get Voice",
        &[
            s("arg0", Lit("Prompt:")),
            i("arg1", Table("903", "Language Model:")),
            i("arg2", Lit("Timeout (Seconds):")),
        ],
    ),
    // Alerts
    RawEntry::new("61", "Vibrate", &[i("arg0", Lit("Time:"))]),
    RawEntry::new("62", "Vibrate Pattern", &[s("arg0", Lit("Pattern:"))]),
    RawEntry::new(
        "171",
        "Beep",
        &[
            i("arg0", Lit("Frequency:")),
            i("arg1", Lit("Duration:")),
            i("arg2", Lit("Amplitude:")),
            i("arg3", Table("stream", "Stream:")),
        ],
    ),
    RawEntry::new(
        "172",
        "Morse",
        &[
            s("arg0", Lit("Text:")),
            i("arg1", Lit("Frequency:")),
            i("arg2", Lit("Speed:")),
            i("arg3", Table("stream", "Stream:")),
        ],
    ),
    RawEntry::new(
        "523",
        "Notify",
        &[
            s("arg0", Lit("Title:")),
            s("arg1", Lit("Text:")),
            img("arg2", Plain),
            i("arg3", Lit("Number:")),
            i("arg4", Flag("Permanent")),
            i("arg5", Table("523_priority", "Priority:")),
            s("arg6", Lit("Category:")),
        ],
    ),
    RawEntry::new(
        "525",
        "Notify LED",
        &[
            s("arg0", Lit("Title:")),
            s("arg1", Lit("Text:")),
            i("arg2", Table("525", "Colour:")),
            i("arg3", Lit("Rate:")),
        ],
    ),
    RawEntry::new(
        "536",
        "Notify Vibrate",
        &[
            s("arg0", Lit("Title:")),
            s("arg1", Lit("Text:")),
            s("arg2", Lit("Pattern:")),
        ],
    ),
    RawEntry::new(
        "538",
        "Notify Sound",
        &[
            s("arg0", Lit("Title:")),
            s("arg1", Lit("Text:")),
            s("arg2", Lit("Sound File:")),
        ],
    ),
    RawEntry::new(
        "779",
        "Notify Cancel",
        &[s("arg0", Lit("Title:")), i("arg1", Flag("Warn Not Exist"))],
    ),
    RawEntry::new(
        "377",
        "Text/Image Dialog",
        &[
            s("arg0", Lit("Title:")),
            s("arg1", Lit("Text:")),
            img("arg2", Plain),
            i("arg3", Lit("Timeout (Seconds):")),
            i("arg4", Flag("Use HTML")),
        ],
    ),
    RawEntry::new(
        "378",
        "List Dialog",
        &[
            i("arg0", Table("378", "Mode:")),
            s("arg1", Lit("Title:")),
            s("arg2", Lit("Items:")),
            s("arg3", Lit("Selected Items:")),
            i("arg4", Lit("Timeout (Seconds):")),
        ],
    ),
    RawEntry::new(
        "566",
        "Set Alarm",
        &[
            i("arg0", Lit("Hours:")),
            i("arg1", Lit("Minutes:")),
            s("arg2", Lit("Message:")),
            s("arg3", Lit("Sound:")),
            i("arg4", Flag("Vibrate")),
            i("arg5", Flag("Confirm")),
        ],
    ),
    // Files
    RawEntry::new(
        "342",
        "Test File",
        &[
            i("arg0", Table("342", "Type:")),
            s("arg1", Lit("Data:")),
            s("arg2", Lit("Store Result In:")),
        ],
    ),
    RawEntry::new(
        "410",
        "Write File",
        &[
            s("arg0", Lit("File:")),
            s("arg1", Lit("Text:")),
            i("arg2", Flag("Append")),
            i("arg3", Flag("Add Newline")),
        ],
    ),
    RawEntry::new(
        "417",
        "Read File",
        &[s("arg0", Lit("File:")), s("arg1", Lit("To Var:"))],
    ),
    RawEntry::new(
        "415",
        "Read Line",
        &[
            s("arg0", Lit("File:")),
            i("arg1", Lit("Line:")),
            s("arg2", Lit("To Var:")),
        ],
    ),
    RawEntry::new(
        "416",
        "Read Paragraph",
        &[
            s("arg0", Lit("File:")),
            i("arg1", Lit("Paragraph:")),
            s("arg2", Lit("To Var:")),
        ],
    ),
    RawEntry::new(
        "406",
        "Delete File",
        &[s("arg0", Lit("File:")), i("arg1", Lit("Shred Times:"))],
    ),
    RawEntry::new(
        "407",
        "Delete Directory",
        &[
            s("arg0", Lit("Directory:")),
            i("arg1", Flag("Recurse")),
            i("arg2", Flag("Use Root")),
        ],
    ),
    RawEntry::new(
        "404",
        "Copy File",
        &[s("arg0", Lit("From:")), s("arg1", Lit("To:"))],
    ),
    RawEntry::new(
        "405",
        "Copy Directory",
        &[
            s("arg0", Lit("From:")),
            s("arg1", Lit("To:")),
            i("arg2", Flag("Use Root")),
        ],
    ),
    RawEntry::new(
        "400",
        "Move",
        &[s("arg0", Lit("From:")), s("arg1", Lit("To:"))],
    ),
    RawEntry::new(
        "409",
        "Create Directory",
        &[s("arg0", Lit("Directory:")), i("arg1", Flag("Create All"))],
    ),
    RawEntry::new(
        "412",
        "List Files",
        &[
            s("arg0", Lit("Directory:")),
            s("arg1", Lit("Match:")),
            i("arg2", Flag("Include Hidden Files")),
            i("arg3", Table("412_sort", "Sort Select:")),
            s("arg4", Lit("Variable Array:")),
        ],
    ),
    RawEntry::new(
        "420",
        "Zip",
        &[
            s("arg0", Lit("File:")),
            i("arg1", Flag("Delete Original")),
            i("arg2", Lit("Level:")),
        ],
    ),
    RawEntry::new(
        "422",
        "UnZip",
        &[s("arg0", Lit("File:")), i("arg1", Flag("Delete Zip"))],
    ),
    // Images
    RawEntry::new(
        "188",
        "Load Image",
        &[
            s("arg0", Lit("File:")),
            i("arg1", Flag("Respect Orientation")),
        ],
    ),
    RawEntry::new(
        "186",
        "Save Image",
        &[
            s("arg0", Lit("File:")),
            i("arg1", Lit("Quality:")),
            i("arg2", Flag("Delete From Memory")),
        ],
    ),
    RawEntry::new(
        "184",
        "Crop Image",
        &[
            i("arg0", Lit("Left:")),
            i("arg1", Lit("Right:")),
            i("arg2", Lit("Top:")),
            i("arg3", Lit("Bottom:")),
        ],
    ),
    RawEntry::new(
        "185",
        "Filter Image",
        &[i("arg0", Table("185", "Mode:")), i("arg1", Lit("Value:"))],
    ),
    RawEntry::new(
        "187",
        "Resize Image",
        &[i("arg0", Lit("Width:")), i("arg1", Lit("Height:"))],
    ),
    RawEntry::new(
        "189",
        "Rotate Image",
        &[i("arg0", Table("189", "Dir:")), i("arg1", Lit("Degrees:"))],
    ),
    RawEntry::new("190", "Flip Image", &[i("arg0", Table("190", "Dir:"))]),
    // Device
    RawEntry::new("511", "Torch", &[i("arg0", TOGGLE)]),
    RawEntry::new("822", "Auto-Rotate", &[i("arg0", TOGGLE)]),
    RawEntry::new("175", "Power Mode", &[i("arg0", Table("175", "Mode:"))]),
    RawEntry::new("905", "Location Mode", &[i("arg0", Table("905", "Mode:"))]),
    RawEntry::new(
        "902",
        "Get Location v2",
        &[
            i("arg0", Lit("Timeout (Seconds):")),
            i("arg1", Flag("Enable Location If Needed")),
            i("arg2", Flag("Last Location If Timeout")),
        ],
    ),
    RawEntry::new(
        "810",
        "Display Brightness",
        &[
            i("arg0", Lit("Level:")),
            i("arg1", Flag("Disable Safeguard")),
            i("arg2", Flag("Ignore Current Level")),
        ],
    ),
    RawEntry::new("808", "Display Auto Brightness", &[i("arg0", TOGGLE)]),
    RawEntry::new(
        "812",
        "Display Timeout",
        &[
            i("arg0", Lit("Seconds:")),
            i("arg1", Lit("Minutes:")),
            i("arg2", Lit("Hours:")),
        ],
    ),
    RawEntry::new("820", "Stay On", &[i("arg0", Table("820", "Mode:"))]),
    RawEntry::new("256", "Silent Mode", &[i("arg0", Table("256", "Mode:"))]),
    RawEntry::new(
        "307",
        "Media Volume",
        &[
            i("arg0", Lit("Level:")),
            i("arg1", Flag("Display")),
            i("arg2", Flag("Sound")),
        ],
    ),
    RawEntry::alias("303", "Call Volume", "307"),
    RawEntry::alias("304", "Alarm Volume", "307"),
    RawEntry::alias("305", "Ringer Volume", "307"),
    RawEntry::alias("306", "Notification Volume", "307"),
    RawEntry::alias("308", "System Volume", "307"),
    RawEntry::alias("309", "DTMF Volume", "307"),
    RawEntry::alias("310", "BT Voice Volume", "307"),
    RawEntry::new("311", "Do Not Disturb", &[i("arg0", Table("311", "Mode:"))]),
    RawEntry::new("136", "Sound Effects", &[i("arg0", TOGGLE)]),
    RawEntry::new("177", "Haptic Feedback", &[i("arg0", TOGGLE)]),
    RawEntry::new(
        "443",
        "Media Control",
        &[
            i("arg0", Table("443", "Cmd:")),
            i("arg1", Flag("Simulate Media Button")),
            app("arg2", Plain),
        ],
    ),
    RawEntry::new(
        "455",
        "Music Play",
        &[
            s("arg0", Lit("File:")),
            i("arg1", Lit("Start:")),
            i("arg2", Flag("Loop")),
            i("arg3", Table("stream", "Stream:")),
        ],
    ),
    RawEntry::new(
        "445",
        "Music Play Dir",
        &[
            s("arg0", Lit("Dir:")),
            i("arg1", Flag("Subdirs")),
            i("arg2", Flag("Audio Only")),
            i("arg3", Flag("Random")),
        ],
    ),
    RawEntry::new("447", "Music Skip", &[i("arg0", Lit("Seconds:"))]),
    RawEntry::new("451", "Music Back", &[i("arg0", Lit("Seconds:"))]),
    RawEntry::new("449", "Music Stop", &[i("arg0", Flag("Clear Dir"))]),
    RawEntry::new(
        "457",
        "Record Audio",
        &[
            s("arg0", Lit("File:")),
            i("arg1", Table("457_source", "Source:")),
            i("arg2", Table("457_codec", "Codec:")),
            i("arg3", Table("457_format", "Format:")),
        ],
    ),
    RawEntry::new("657", "Record Audio Stop", &[]),
    RawEntry::new("348", "Reboot", &[i("arg0", Table("348", "Type:"))]),
    RawEntry::new(
        "15",
        "Lock",
        &[
            s("arg0", Lit("Title:")),
            s("arg1", Lit("Code:")),
            i("arg2", Flag("Allow Cancel")),
            i("arg3", Flag("Remember")),
        ],
    ),
    RawEntry::new("16", "System Lock", &[]),
    RawEntry::new("150", "Keyguard", &[i("arg0", TOGGLE)]),
    RawEntry::new("151", "Keyguard Pattern", &[s("arg0", Lit("Pattern:"))]),
    RawEntry::new("345", "Close System Dialogs", &[]),
    RawEntry::new("512", "Status Bar", &[i("arg0", Table("512", "Set:"))]),
    RawEntry::new("987", "Soft Keyboard", &[i("arg0", TOGGLE)]),
    RawEntry::new("988", "Car Mode", &[i("arg0", TOGGLE)]),
    RawEntry::new("989", "Night Mode", &[i("arg0", Table("989", "Mode:"))]),
    RawEntry::new(
        "109",
        "Set Wallpaper",
        &[img("arg0", Plain), i("arg1", Table("109", "Screen:"))],
    ),
    RawEntry::new(
        "101",
        "Take Photo",
        &[
            i("arg0", Table("101", "Camera:")),
            s("arg1", Lit("Filename:")),
            i("arg2", Flag("Insert In Gallery")),
        ],
    ),
    RawEntry::new(
        "102",
        "Open File",
        &[s("arg0", Lit("File:")), s("arg1", Lit("Mime Type:"))],
    ),
    RawEntry::new(
        "235",
        "Custom Setting",
        &[
            i("arg0", Table("235", "Type:")),
            s("arg1", Lit("Name:")),
            s("arg2", Lit("Value:")),
            s("arg3", Lit("Read Setting To:")),
        ],
    ),
    // Scenes
    RawEntry::new("46", "Create Scene", &[s("arg0", Lit("Name:"))]),
    RawEntry::new(
        "47",
        "Show Scene",
        &[
            s("arg0", Lit("Name:")),
            i("arg1", Table("47", "Display As:")),
            i("arg2", Lit("Horizontal Position:")),
            i("arg3", Lit("Vertical Position:")),
            i("arg4", Flag("Show Exit Button")),
            i("arg5", Flag("Continue Task Immediately")),
        ],
    ),
    RawEntry::new("48", "Hide Scene", &[s("arg0", Lit("Name:"))]),
    RawEntry::new("49", "Destroy Scene", &[s("arg0", Lit("Name:"))]),
    RawEntry::new(
        "50",
        "Element Value",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            s("arg2", Lit("Value:")),
        ],
    ),
    RawEntry::new(
        "52",
        "Element Text Colour",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            s("arg2", Lit("Colour:")),
        ],
    ),
    RawEntry::new(
        "53",
        "Element Image",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            img("arg2", Plain),
        ],
    ),
    RawEntry::new(
        "54",
        "Element Back Colour",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            s("arg2", Lit("Colour:")),
            s("arg3", Lit("End Colour:")),
        ],
    ),
    RawEntry::new(
        "56",
        "Element Border",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            i("arg2", Lit("Width:")),
            s("arg3", Lit("Colour:")),
        ],
    ),
    RawEntry::new(
        "57",
        "Element Position",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            i("arg2", Table("portrait_landscape", "Orientation:")),
            i("arg3", Lit("X:")),
            i("arg4", Lit("Y:")),
            i("arg5", Lit("Animation Time (MS):")),
        ],
    ),
    RawEntry::new(
        "58",
        "Element Focus",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            i("arg2", Flag("Show Soft Keyboard")),
        ],
    ),
    RawEntry::new(
        "59",
        "Element Web Control",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            i("arg2", Table("59", "Mode:")),
        ],
    ),
    RawEntry::new(
        "65",
        "Element Visibility",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            i("arg2", Flag("Set")),
            i("arg3", Lit("Animation Time (MS):")),
        ],
    ),
    RawEntry::new(
        "67",
        "Element Size",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            i("arg2", Lit("Width:")),
            i("arg3", Lit("Height:")),
            i("arg4", Lit("Animation Time (MS):")),
        ],
    ),
    RawEntry::new(
        "71",
        "Element Text Size",
        &[
            s("arg0", Lit("Scene Name:")),
            s("arg1", Lit("Element:")),
            i("arg2", Lit("Size:")),
        ],
    ),
    RawEntry::new(
        "195",
        "Test Scene",
        &[
            s("arg0", Lit("Scene:")),
            i("arg1", Table("195", "Test:")),
            s("arg2", Lit("Store Result In:")),
        ],
    ),
    // Plugins
    RawEntry::new(
        "1040876951",
        "Plugin Action",
        &[bundle("arg0"), i("arg1", Lit("Timeout (Seconds):"))],
    ),
];
