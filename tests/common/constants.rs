//! Test fixture ids and values

pub const OWNER: &str = "alice";
pub const OTHER_USER: &str = "bob";

pub const FOLDER_ID: &str = "0";

pub const ARTIST_BEATLES_ID: &str = "ar-beatles";
pub const ARTIST_ABBA_ID: &str = "ar-abba";
pub const ARTIST_BOWIE_ID: &str = "ar-bowie";
pub const ARTIST_2PAC_ID: &str = "ar-2pac";
pub const ARTIST_CURE_ID: &str = "ar-cure";

pub const ALBUM_ABBEY_ROAD_ID: &str = "al-abbey-road";
pub const ALBUM_HELP_ID: &str = "al-help";
pub const ALBUM_LOW_ID: &str = "al-low";

/// Abbey Road tracks, listed in disc/track order
pub const TRACK_A_ID: &str = "t-come-together";
pub const TRACK_B_ID: &str = "t-something";
pub const TRACK_C_ID: &str = "t-octopus";
pub const TRACK_D_ID: &str = "t-help";
pub const TRACK_E_ID: &str = "t-sound-and-vision";

/// Library last scan time, Unix milliseconds
pub const LAST_SCAN_MILLIS: i64 = 1_700_000_000_000;
