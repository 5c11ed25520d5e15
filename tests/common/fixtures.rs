//! Test library creation

use super::constants::*;
use chrono::{DateTime, Utc};
use sonic_library::model::{Album, Artist, MediaFile, MediaFolder};
use sonic_library::MemoryDataStore;

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn artist(id: &str, name: &str, album_count: u32) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        album_count,
    }
}

fn album(id: &str, name: &str, artist_id: &str, artist: &str, year: i32) -> Album {
    Album {
        id: id.to_string(),
        name: name.to_string(),
        artist_id: artist_id.to_string(),
        artist: artist.to_string(),
        album_artist: artist.to_string(),
        year: Some(year),
        cover_art_id: Some(id.to_string()),
        play_count: 3,
        rating: 4,
        ..Default::default()
    }
}

fn track(id: &str, title: &str, album: &Album, disc: u32, number: u32) -> MediaFile {
    MediaFile {
        id: id.to_string(),
        title: title.to_string(),
        album: album.name.clone(),
        album_id: album.id.clone(),
        artist: album.artist.clone(),
        artist_id: album.artist_id.clone(),
        album_artist: album.album_artist.clone(),
        track_number: Some(number),
        disc_number: Some(disc),
        year: album.year,
        duration: 200,
        suffix: "mp3".to_string(),
        content_type: "audio/mpeg".to_string(),
        path: format!("{}/{:02} - {}.mp3", album.name, number, title),
        ..Default::default()
    }
}

/// Creates a library with 5 artists, 3 albums and 5 tracks, scanned at
/// [`LAST_SCAN_MILLIS`].
///
/// Tracks are inserted out of order so listings have to sort them.
pub fn create_test_library() -> MemoryDataStore {
    let store = MemoryDataStore::new();

    store
        .add_media_folder(MediaFolder {
            id: FOLDER_ID.to_string(),
            name: "Music Library".to_string(),
        })
        .unwrap();

    for artist in [
        artist(ARTIST_BEATLES_ID, "The Beatles", 2),
        artist(ARTIST_ABBA_ID, "ABBA", 0),
        artist(ARTIST_BOWIE_ID, "David Bowie", 1),
        artist(ARTIST_2PAC_ID, "2Pac", 0),
        artist(ARTIST_CURE_ID, "The Cure", 0),
    ] {
        store.add_artist(artist).unwrap();
    }

    let abbey_road = album(
        ALBUM_ABBEY_ROAD_ID,
        "Abbey Road",
        ARTIST_BEATLES_ID,
        "The Beatles",
        1969,
    );
    let help = album(ALBUM_HELP_ID, "Help!", ARTIST_BEATLES_ID, "The Beatles", 1965);
    let low = album(ALBUM_LOW_ID, "Low", ARTIST_BOWIE_ID, "David Bowie", 1977);

    for media_file in [
        track(TRACK_C_ID, "Octopus's Garden", &abbey_road, 1, 5),
        track(TRACK_A_ID, "Come Together", &abbey_road, 1, 1),
        track(TRACK_B_ID, "Something", &abbey_road, 1, 2),
        track(TRACK_D_ID, "Help!", &help, 1, 1),
        track(TRACK_E_ID, "Sound and Vision", &low, 1, 3),
    ] {
        store.add_media_file(media_file).unwrap();
    }
    for album in [abbey_road, help, low] {
        store.add_album(album).unwrap();
    }

    store
        .set_last_scan(DateTime::<Utc>::from_timestamp_millis(LAST_SCAN_MILLIS).unwrap())
        .unwrap();
    store
}
