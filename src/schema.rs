// Hand-written to match the DDL in repository::context.

diesel::table! {
    hikes (id) {
        id -> Integer,
        number -> Integer,
        name -> Text,
        description -> Text,
        round_trip_miles -> Double,
        hiking_time_min -> Double,
        hiking_time_max -> Double,
        difficulty_rating -> Double,
        difficulty_label -> Text,
        class_numeric -> Double,
        class_text -> Text,
        start_elevation -> Integer,
        total_elevation_gain -> Integer,
        terrain -> Text,
        crowd_level_numeric -> Integer,
        crowd_level_text -> Text,
        is_overnight -> Bool,
        gear_advisor -> Nullable<Text>,
        location -> Nullable<Text>,
        bonus_peaks -> Nullable<Text>,
    }
}

diesel::table! {
    peaks (id) {
        id -> Integer,
        hike_id -> Integer,
        peak_name -> Nullable<Text>,
        elevation -> Integer,
        is_primary -> Bool,
    }
}

diesel::table! {
    trailheads (id) {
        id -> Integer,
        hike_id -> Integer,
        name -> Text,
        latitude -> Double,
        longitude -> Double,
        elevation -> Integer,
    }
}

diesel::table! {
    climbing_seasons (id) {
        id -> Integer,
        hike_id -> Integer,
        start_month -> Integer,
        end_month -> Integer,
        season_text -> Text,
    }
}

// View: hikes LEFT JOIN their primary peak.
diesel::table! {
    hikes_with_peaks (id) {
        id -> Integer,
        number -> Integer,
        name -> Text,
        description -> Text,
        round_trip_miles -> Double,
        hiking_time_min -> Double,
        hiking_time_max -> Double,
        difficulty_rating -> Double,
        difficulty_label -> Text,
        class_numeric -> Double,
        class_text -> Text,
        start_elevation -> Integer,
        total_elevation_gain -> Integer,
        terrain -> Text,
        crowd_level_numeric -> Integer,
        crowd_level_text -> Text,
        is_overnight -> Bool,
        gear_advisor -> Nullable<Text>,
        location -> Nullable<Text>,
        bonus_peaks -> Nullable<Text>,
        highest_peak_elevation -> Nullable<Integer>,
    }
}

diesel::joinable!(peaks -> hikes (hike_id));
diesel::joinable!(trailheads -> hikes (hike_id));
diesel::joinable!(climbing_seasons -> hikes (hike_id));

diesel::allow_tables_to_appear_in_same_query!(
    hikes,
    peaks,
    trailheads,
    climbing_seasons,
    hikes_with_peaks,
);
