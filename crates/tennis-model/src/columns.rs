//! Column names and canonical orderings of every exported table.

// Shared match columns.
pub const MATCH_ID: &str = "match_id";
pub const SOURCE: &str = "source";
pub const TOURNEY_ID: &str = "tourney_id";
pub const TOURNEY_NAME: &str = "tourney_name";
pub const SURFACE: &str = "surface";
pub const DRAW_SIZE: &str = "draw_size";
pub const TOURNEY_LEVEL: &str = "tourney_level";
pub const TOURNEY_DATE: &str = "tourney_date";
pub const MATCH_NUM: &str = "match_num";
pub const WINNER_ID: &str = "winner_id";
pub const WINNER_NAME: &str = "winner_name";
pub const LOSER_ID: &str = "loser_id";
pub const LOSER_NAME: &str = "loser_name";
pub const SCORE: &str = "score";
pub const BEST_OF: &str = "best_of";
pub const ROUND: &str = "round";
pub const GENDER: &str = "gender";
pub const DISCIPLINE: &str = "discipline";
pub const HAS_POINTS: &str = "has_points";
pub const HAS_SHOTS: &str = "has_shots";

// Derived by enrichment.
pub const EVENT_YEAR: &str = "event_year";
pub const EVENT_MONTH: &str = "event_month";
pub const EVENT_DATE: &str = "event_date";
pub const SET_COLUMNS: [&str; 5] = ["set1", "set2", "set3", "set4", "set5"];

/// Suffix of the normalized helper columns added during canonicalization.
pub const NORM_SUFFIX: &str = "_norm";

/// Text columns that receive a `<name>_norm` companion during canonicalization.
pub const NORMALIZED_MATCH_TEXT: [&str; 5] =
    [TOURNEY_NAME, WINNER_NAME, LOSER_NAME, SURFACE, ROUND];

/// Projection applied to integrated tour and futures matches, in output order.
///
/// Columns a source does not provide are omitted, never invented.
pub const CANONICAL_MATCH_COLUMNS: [&str; 53] = [
    MATCH_ID,
    SOURCE,
    TOURNEY_ID,
    TOURNEY_NAME,
    SURFACE,
    DRAW_SIZE,
    TOURNEY_LEVEL,
    TOURNEY_DATE,
    MATCH_NUM,
    WINNER_ID,
    "winner_seed",
    "winner_entry",
    WINNER_NAME,
    "winner_hand",
    "winner_ht",
    "winner_ioc",
    "winner_age",
    LOSER_ID,
    "loser_seed",
    "loser_entry",
    LOSER_NAME,
    "loser_hand",
    "loser_ht",
    "loser_ioc",
    "loser_age",
    SCORE,
    BEST_OF,
    ROUND,
    "minutes",
    "w_ace",
    "w_df",
    "w_svpt",
    "w_1stIn",
    "w_1stWon",
    "w_2ndWon",
    "w_SvGms",
    "w_bpSaved",
    "w_bpFaced",
    "l_ace",
    "l_df",
    "l_svpt",
    "l_1stIn",
    "l_1stWon",
    "l_2ndWon",
    "l_SvGms",
    "l_bpSaved",
    "l_bpFaced",
    "winner_rank",
    "winner_rank_points",
    "loser_rank",
    "loser_rank_points",
    GENDER,
    DISCIPLINE,
];

// Raw Grand Slam summary columns.
pub const SLAM_EVENT: &str = "slam";
pub const SLAM_YEAR: &str = "year";
pub const SLAM_WINNER: &str = "winner";

/// Columns of a projected Grand Slam summary row, in output order.
pub const SLAM_MATCH_COLUMNS: [&str; 12] = [
    SOURCE,
    TOURNEY_NAME,
    TOURNEY_ID,
    TOURNEY_DATE,
    MATCH_NUM,
    WINNER_NAME,
    LOSER_NAME,
    ROUND,
    BEST_OF,
    GENDER,
    DISCIPLINE,
    MATCH_ID,
];

// Raw player columns.
pub const PLAYER_ID: &str = "player_id";
pub const NAME_FIRST: &str = "name_first";
pub const NAME_LAST: &str = "name_last";
pub const HAND: &str = "hand";
pub const DOB: &str = "dob";
pub const IOC: &str = "ioc";
pub const HEIGHT: &str = "height";
pub const WIKIDATA_ID: &str = "wikidata_id";

// Player dimension columns.
pub const PLAYER_CANONICAL_ID: &str = "player_canonical_id";
pub const FULL_NAME: &str = "full_name";
pub const PLAYER_ID_ATP: &str = "player_id_atp";
pub const PLAYER_ID_WTA: &str = "player_id_wta";
pub const SOURCE_ID: &str = "source_id";

/// Player dimension, in output order.
pub const PLAYER_DIM_COLUMNS: [&str; 11] = [
    PLAYER_CANONICAL_ID,
    FULL_NAME,
    NAME_FIRST,
    NAME_LAST,
    HAND,
    DOB,
    IOC,
    HEIGHT,
    WIKIDATA_ID,
    PLAYER_ID_ATP,
    PLAYER_ID_WTA,
];

/// Player alias table, in output order.
pub const PLAYER_ALIAS_COLUMNS: [&str; 3] = [PLAYER_CANONICAL_ID, SOURCE, SOURCE_ID];

/// Tournament dimension, in output order.
pub const TOURNAMENT_COLUMNS: [&str; 6] = [
    TOURNEY_ID,
    TOURNEY_NAME,
    SURFACE,
    TOURNEY_LEVEL,
    DRAW_SIZE,
    TOURNEY_DATE,
];

pub const ALIAS: &str = "alias";

/// Tournament alias table, in output order.
pub const TOURNAMENT_ALIAS_COLUMNS: [&str; 3] = [TOURNEY_ID, ALIAS, SOURCE];

/// Dataset manifest, in output order.
pub const MANIFEST_COLUMNS: [&str; 7] = [
    SOURCE,
    "domain",
    "kind",
    "rel_path",
    "abs_path",
    "file_name",
    "size_bytes",
];

// Flag and constant values.
pub const FLAG_YES: &str = "Y";
pub const FLAG_NO: &str = "N";
pub const DISCIPLINE_SINGLES: &str = "singles";
pub const TOUR_ALIAS_SOURCE: &str = "tour";
