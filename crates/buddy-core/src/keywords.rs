//! Static matching tables. Every entry is already in folded form (lower-case,
//! no diacritics), the same form `normalize` produces for incoming text.

use buddy_schema::Category;

/// Category keyword table, in tie-break order.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Stress,
        &[
            "stress",
            "cang thang",
            "ap luc",
            "kiem tra",
            "thi cu",
            "on thi",
            "thi dai hoc",
            "qua tai",
            "nhieu viec",
            "met moi",
            "dau dau",
            "so sanh",
            "truot",
            "bo me ky vong",
            "lich hoc",
            "bai kho",
        ],
    ),
    (
        Category::Anxiety,
        &[
            "lo lang",
            "anxiety",
            "lo au",
            "hoi hop",
            "so hai",
            "hoang loan",
            "panic",
            "ngu khong duoc",
            "mat ngu lo",
            "nguoi khac nghi",
            "bi phan xet",
            "bat an",
            "khong yen",
            "run",
            "tim dap nhanh",
            "kho tho",
        ],
    ),
    (
        Category::Motivation,
        &[
            "mat dong luc",
            "chan hoc",
            "khong muon hoc",
            "luoi",
            "tri hoan",
            "khong co muc tieu",
            "vo nghia",
            "game",
            "dien tu",
            "nan long",
            "bo cuoc",
            "that bai",
            "ghen ti",
            "procrastinat",
        ],
    ),
    (
        Category::Focus,
        &[
            "tap trung",
            "focus",
            "phan tam",
            "mat tap trung",
            "hay quen",
            "khong nho",
            "dien thoai",
            "mang xa hoi",
            "facebook",
            "tiktok",
            "lan man",
            "buon ngu khi hoc",
            "adhd",
            "tang dong",
            "khong hoan thanh",
        ],
    ),
    (
        Category::Sleep,
        &[
            "ngu",
            "sleep",
            "mat ngu",
            "kho ngu",
            "khong ngu duoc",
            "buon ngu",
            "ac mong",
            "thuc khuya",
            "day som",
            "giac ngu",
            "ngu khong ngon",
            "nghi nhieu truoc khi ngu",
        ],
    ),
    (
        Category::Loneliness,
        &[
            "co don",
            "le loi",
            "mot minh",
            "khong co ban",
            "ban be",
            "bi xa lanh",
            "bi bo roi",
            "chia tay",
            "mau thuan",
            "xung dot",
            "thay co",
            "bo me khong hieu",
            "khong ai hieu",
            "tinh yeu",
        ],
    ),
    (
        Category::SelfEsteem,
        &[
            "tu ti",
            "kem coi",
            "ngoai hinh",
            "xau",
            "beo",
            "gay",
            "khong gioi",
            "dot",
            "vo dung",
            "khong xung dang",
            "tu trach",
            "tu phe binh",
            "diem thap",
        ],
    ),
    (
        Category::Depression,
        &[
            "buon",
            "tram cam",
            "depression",
            "sad",
            "trong rong",
            "vo cam",
            "mat hung",
            "khoc",
            "tuyet vong",
            "vo vong",
            "khong co hy vong",
            "tu tu",
            "tu lam hai",
            "chet",
            "khong con suc",
        ],
    ),
];

/// Self-harm phrases that short-circuit every other route.
pub const EMERGENCY_PHRASES: &[&str] = &[
    "tu tu",
    "tu lam hai",
    "muon chet",
    "khong muon song",
    "ket thuc tat ca",
];

/// Keyword used to look up the curated crisis scenario.
pub const CRISIS_LOOKUP_KEYWORD: &str = "tu tu";

/// Second-pass keywords tried in order once a category is known.
pub const TRIGGER_KEYWORDS: &[&str] = &[
    "thi cu",
    "kiem tra",
    "bai tap",
    "bo me",
    "gia dinh",
    "ban be",
    "thay co",
    "dien thoai",
    "game",
    "ngu",
    "tap trung",
    "mat dong luc",
    "tu ti",
    "buon",
    "lo lang",
    "stress",
    "truot",
    "chan",
    "luoi",
];

/// Ordered `(keyword, reply)` pairs; first containment match wins.
pub const GREETINGS: &[(&str, &str)] = &[
    (
        "xin chao",
        "Xin chao! Minh la Buddy AI - nguoi ban dong hanh tam ly 24/7. Ban dang cam thay the nao?",
    ),
    (
        "chao",
        "Xin chao! Minh la Buddy AI - nguoi ban dong hanh 24/7. Ban dang cam thay the nao hom nay?",
    ),
    (
        "hello",
        "Hello! Minh o day de lang nghe ban. Hay chia se bat cu dieu gi ban muon nhe!",
    ),
    ("hi ", "Hi! Buddy AI day. Ban can minh ho tro gi hom nay?"),
    (
        "hoc",
        "Hoc tap doi khi rat thu thach. Ban dang gap kho khan o diem nao?",
    ),
    (
        "met",
        "Met moi la tin hieu co the can nghi ngoi. Ban dang met vi dieu gi?",
    ),
    (
        "khoc",
        "Duoc khoc la dieu binh thuong. Minh o day ben ban. Chuyen gi dang xay ra vay?",
    ),
    (
        "ap luc",
        "Ap luc co the rat nang ne. Hay chia se them de minh hieu ban dang doi mat voi gi nhe.",
    ),
    (
        "co don",
        "Cam giac co don rat pho bien. Ban khong he mot minh - minh luon o day lang nghe.",
    ),
];

pub const DEFAULT_RESPONSE: &str = "Cam on ban da chia se! Minh dang lang nghe. Ban co the ke them de minh hieu ro hon va ho tro ban tot hon khong?\n\nNgoai ra, ban co the thu:\n- Nghe am thanh song nao trong muc Audio\n- Xem video meo hoc tap\n- Quet ma QR de truy cap nhanh tai nguyen";

pub const CRISIS_HOTLINE: &str = "1800 599 920";

/// Used when the curated crisis scenario cannot be loaded.
pub const CRISIS_FALLBACK_RESPONSE: &str = "Minh rat lo lang khi nghe dieu nay. Ban khong co don - co nguoi san sang lang nghe va giup ban ngay bay gio.\n\nDuong day ho tro khung hoang tam than Viet Nam: 1800 599 920 (mien phi, 24/7)\n\nHay goi ngay nhe. Minh o day ben ban.\n\nYou are not alone. Please call the Vietnam mental health crisis line 1800 599 920 (free, 24/7) right now.";

/// Joins a scenario response and its tip ("Meo" = tip).
pub const TIP_SEPARATOR: &str = "\n\n Meo: ";
