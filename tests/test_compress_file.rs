use std::fs;
use std::sync::Arc;

use comva::test_utils::{EncodeCall, MockBehaviour, MockEncoder};
use comva::{compress_file, FileOutcome, MediaType, TargetFormat};

mod common;
use common::{encoders, list_files, media_file, options_for, write_media};

#[test]
fn test_in_place_removes_original() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_media(dir.path(), "cat.png", 100);
    let image = Arc::new(MockEncoder::shrinking());
    let av = Arc::new(MockEncoder::shrinking());
    let options = comva::CompressOptions {
        image: TargetFormat::KeepExtension,
        quality: Some(70),
        ..options_for(&dir)
    };

    let outcome = compress_file(
        &media_file(source.clone(), MediaType::Image),
        &options,
        &encoders(&image, &av),
    );

    assert_eq!(
        outcome,
        FileOutcome::Compressed {
            source: source.clone(),
            output: source.clone(),
            media_type: MediaType::Image,
            input_size: 100,
            output_size: 50,
        }
    );
    assert_eq!(list_files(dir.path()), vec!["cat.png"]);
    assert_eq!(
        image.calls(),
        vec![EncodeCall {
            input: dir.path().join("cat.png.tmp"),
            output: source,
            output_ext: "png".to_string(),
            quality: Some(70),
        }]
    );
    assert!(av.calls().is_empty());
}

#[test]
fn test_in_place_keeps_backup() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_media(dir.path(), "song.flac", 64);
    let av = Arc::new(MockEncoder::shrinking());
    let options = comva::CompressOptions {
        audio: TargetFormat::Convert("flac".into()),
        keep_files: true,
        ..options_for(&dir)
    };

    let outcome = compress_file(
        &media_file(source, MediaType::Audio),
        &options,
        &encoders(&Arc::new(MockEncoder::shrinking()), &av),
    );

    assert!(outcome.is_compressed());
    assert_eq!(
        list_files(dir.path()),
        vec!["song.flac", "song.flac.backup"]
    );
    assert_eq!(fs::read(dir.path().join("song.flac.backup")).unwrap().len(), 64);
    assert_eq!(fs::read(dir.path().join("song.flac")).unwrap().len(), 32);
}

#[test]
fn test_convert_keeps_original_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_media(dir.path(), "song.wav", 10);
    let av = Arc::new(MockEncoder::shrinking());
    let options = comva::CompressOptions {
        audio: TargetFormat::Convert("mp3".into()),
        keep_files: true,
        ..options_for(&dir)
    };

    let outcome = compress_file(
        &media_file(source.clone(), MediaType::Audio),
        &options,
        &encoders(&Arc::new(MockEncoder::shrinking()), &av),
    );

    assert!(outcome.is_compressed());
    assert_eq!(list_files(dir.path()), vec!["song.mp3", "song.wav"]);
    assert_eq!(av.calls()[0].input, source);
    assert_eq!(av.calls()[0].output_ext, "mp3");
}

#[test]
fn test_existing_output_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_media(dir.path(), "clip.avi", 10);
    write_media(dir.path(), "clip.mp4", 3);
    let av = Arc::new(MockEncoder::shrinking());
    let options = comva::CompressOptions {
        video: TargetFormat::Convert("mp4".into()),
        ..options_for(&dir)
    };

    let outcome = compress_file(
        &media_file(source.clone(), MediaType::Video),
        &options,
        &encoders(&Arc::new(MockEncoder::shrinking()), &av),
    );

    assert_eq!(
        outcome,
        FileOutcome::Skipped {
            source,
            media_type: MediaType::Video,
            reason: "output already exists!".to_string(),
        }
    );
    assert!(av.calls().is_empty());
    assert_eq!(fs::read(dir.path().join("clip.mp4")).unwrap().len(), 3);
}

#[test]
fn test_failure_restores_original() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_media(dir.path(), "cat.png", 100);
    let image = Arc::new(MockEncoder::failing("corrupt image"));
    let options = comva::CompressOptions {
        image: TargetFormat::KeepExtension,
        ..options_for(&dir)
    };

    let outcome = compress_file(
        &media_file(source.clone(), MediaType::Image),
        &options,
        &encoders(&image, &Arc::new(MockEncoder::shrinking())),
    );

    assert!(matches!(
        outcome,
        FileOutcome::Failed { ref error, .. } if error == "corrupt image"
    ));
    assert_eq!(list_files(dir.path()), vec!["cat.png"]);
    assert_eq!(fs::read(source).unwrap(), vec![b'x'; 100]);
}

#[test]
fn test_failure_removes_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_media(dir.path(), "cat.bmp", 100);
    let options = comva::CompressOptions {
        image: TargetFormat::Convert("webp".into()),
        ..options_for(&dir)
    };

    let outcome = compress_file(
        &media_file(source, MediaType::Image),
        &options,
        &encoders(
            &Arc::new(MockEncoder::failing("unsupported")),
            &Arc::new(MockEncoder::shrinking()),
        ),
    );

    assert!(matches!(outcome, FileOutcome::Failed { .. }));
    assert_eq!(list_files(dir.path()), vec!["cat.bmp"]);
}

#[test]
fn test_leftover_staged_file_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_media(dir.path(), "cat.gif", 10);
    write_media(dir.path(), "cat.gif.tmp", 5);
    let image = Arc::new(MockEncoder::shrinking());
    let options = comva::CompressOptions {
        image: TargetFormat::KeepExtension,
        ..options_for(&dir)
    };

    let outcome = compress_file(
        &media_file(source, MediaType::Image),
        &options,
        &encoders(&image, &Arc::new(MockEncoder::shrinking())),
    );

    assert!(matches!(outcome, FileOutcome::Skipped { .. }));
    assert!(image.calls().is_empty());
    assert_eq!(list_files(dir.path()), vec!["cat.gif", "cat.gif.tmp"]);
}

#[test]
fn test_panic_restores_original() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_media(dir.path(), "cat.png", 100);
    let image = Arc::new(MockEncoder::new(MockBehaviour::Panic("boom".to_string())));
    let options = comva::CompressOptions {
        image: TargetFormat::KeepExtension,
        ..options_for(&dir)
    };

    let outcome = compress_file(
        &media_file(source.clone(), MediaType::Image),
        &options,
        &encoders(&image, &Arc::new(MockEncoder::shrinking())),
    );

    assert_eq!(
        outcome,
        FileOutcome::Failed {
            source: source.clone(),
            media_type: MediaType::Image,
            error: "panicked: boom".to_string(),
        }
    );
    assert_eq!(list_files(dir.path()), vec!["cat.png"]);
    assert_eq!(fs::read(source).unwrap(), vec![b'x'; 100]);
}

#[test]
fn test_existing_backup_is_not_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_media(dir.path(), "song.flac", 64);
    write_media(dir.path(), "song.flac.backup", 7);
    let av = Arc::new(MockEncoder::shrinking());
    let options = comva::CompressOptions {
        audio: TargetFormat::KeepExtension,
        keep_files: true,
        ..options_for(&dir)
    };

    let outcome = compress_file(
        &media_file(source, MediaType::Audio),
        &options,
        &encoders(&Arc::new(MockEncoder::shrinking()), &av),
    );

    assert!(matches!(outcome, FileOutcome::Skipped { .. }));
    assert!(av.calls().is_empty());
    assert_eq!(list_files(dir.path()), vec!["song.flac", "song.flac.backup"]);
    assert_eq!(fs::read(dir.path().join("song.flac")).unwrap().len(), 64);
    assert_eq!(fs::read(dir.path().join("song.flac.backup")).unwrap().len(), 7);
}
