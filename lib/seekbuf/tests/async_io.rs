#![cfg(feature = "tokio")]

use std::io::{self, SeekFrom};

use pretty_assertions::assert_eq;
use seekbuf::SeekBuffer;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

#[tokio::test]
async fn test_write_seek_read() {
    let mut buffer = SeekBuffer::new();

    buffer.write_all(b"foobar").await.unwrap();
    buffer.flush().await.unwrap();
    AsyncSeekExt::seek(&mut buffer, SeekFrom::Start(0))
        .await
        .unwrap();
    buffer.write_all(b"baz").await.unwrap();

    assert_eq!(
        AsyncSeekExt::seek(&mut buffer, SeekFrom::Current(-3))
            .await
            .unwrap(),
        0,
    );

    let mut output = Vec::new();
    assert_eq!(buffer.read_to_end(&mut output).await.unwrap(), 6);
    assert_eq!(output, b"bazbar");
}

#[tokio::test]
async fn test_short_read_and_eof() {
    let mut buffer = SeekBuffer::from("foo");

    let mut data = [0; 8];
    assert_eq!(AsyncReadExt::read(&mut buffer, &mut data).await.unwrap(), 3);
    assert_eq!(&data[..3], b"foo");
    assert_eq!(AsyncReadExt::read(&mut buffer, &mut data).await.unwrap(), 0);
}

#[tokio::test]
async fn test_seek_errors() {
    let mut buffer = SeekBuffer::from("foobar");

    let err = AsyncSeekExt::seek(&mut buffer, SeekFrom::Start(6))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

    let err = AsyncSeekExt::seek(&mut buffer, SeekFrom::End(-7))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

    assert_eq!(buffer.stream_position().await.unwrap(), 0);
}

#[tokio::test]
async fn test_copy_between_buffers() {
    let mut source = SeekBuffer::from("foobarquxbaz");
    AsyncSeekExt::seek(&mut source, SeekFrom::Start(3))
        .await
        .unwrap();

    let mut destination = SeekBuffer::new();
    assert_eq!(
        tokio::io::copy(&mut source, &mut destination).await.unwrap(),
        9
    );
    destination.shutdown().await.unwrap();
    assert_eq!(destination.freeze(), "barquxbaz");
}
