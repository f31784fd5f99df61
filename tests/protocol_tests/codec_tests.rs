//! Codec Tests
//!
//! Tests for command and response encoding/decoding.

use std::io::Cursor;

use scoreledger::protocol::{
    decode_command, decode_response, encode_command, encode_response, read_command,
    read_response, write_command, write_response, Command, Response, Status, HEADER_SIZE,
    MAX_PAYLOAD_SIZE,
};
use scoreledger::{Ledger, LedgerError, MemoryLedger, ScoreRecord};

// =============================================================================
// Command Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_encode_decode_get_score() {
    let cmd = Command::GetScore {
        name: "Pepper".to_string(),
    };

    let decoded = decode_command(&encode_command(&cmd).unwrap()).unwrap();

    assert_eq!(decoded, cmd);
}

#[test]
fn test_encode_decode_record_win() {
    let cmd = Command::RecordWin {
        name: "Floyd".to_string(),
    };

    let decoded = decode_command(&encode_command(&cmd).unwrap()).unwrap();

    assert_eq!(decoded, cmd);
}

#[test]
fn test_encode_decode_league_and_ping() {
    for cmd in [Command::League, Command::Ping] {
        let encoded = encode_command(&cmd).unwrap();
        assert_eq!(encoded.len(), HEADER_SIZE);
        assert_eq!(decode_command(&encoded).unwrap(), cmd);
    }
}

#[test]
fn test_command_wire_layout() {
    let encoded = encode_command(&Command::RecordWin {
        name: "Bob".to_string(),
    })
    .unwrap();

    assert_eq!(encoded, vec![0x02, 0, 0, 0, 3, b'B', b'o', b'b']);
}

#[test]
fn test_decode_unicode_name() {
    let cmd = Command::GetScore {
        name: "Łukasz 🎯".to_string(),
    };

    assert_eq!(decode_command(&encode_command(&cmd).unwrap()).unwrap(), cmd);
}

#[test]
fn test_decode_unknown_command() {
    let result = decode_command(&[0x7F, 0, 0, 0, 0]);

    assert!(matches!(result, Err(LedgerError::Protocol(_))));
}

#[test]
fn test_decode_incomplete_header() {
    assert!(matches!(
        decode_command(&[0x01, 0, 0]),
        Err(LedgerError::Protocol(_))
    ));
}

#[test]
fn test_decode_incomplete_payload() {
    assert!(matches!(
        decode_command(&[0x01, 0, 0, 0, 10, b'a']),
        Err(LedgerError::Protocol(_))
    ));
}

#[test]
fn test_decode_oversized_payload() {
    let len = (MAX_PAYLOAD_SIZE + 1).to_be_bytes();
    let bytes = [0x01, len[0], len[1], len[2], len[3]];

    assert!(matches!(decode_command(&bytes), Err(LedgerError::Protocol(_))));
}

#[test]
fn test_decode_invalid_utf8_name() {
    let bytes = [0x01, 0, 0, 0, 2, 0xC3, 0x28];

    assert!(matches!(decode_command(&bytes), Err(LedgerError::Protocol(_))));
}

#[test]
fn test_decode_ping_with_payload_rejected() {
    let bytes = [0x04, 0, 0, 0, 1, b'x'];

    assert!(matches!(decode_command(&bytes), Err(LedgerError::Protocol(_))));
}

// =============================================================================
// Response Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_encode_decode_score_response() {
    let record = ScoreRecord::new("Bob", 3);
    let response = Response::score(&record).unwrap();

    let decoded = decode_response(&encode_response(&response).unwrap()).unwrap();

    assert_eq!(decoded.status, Status::Ok);
    assert_eq!(decoded.record().unwrap(), record);
}

#[test]
fn test_encode_decode_accepted_response() {
    let record = ScoreRecord::new("Alice", 1);
    let response = Response::accepted(&record).unwrap();

    let decoded = decode_response(&encode_response(&response).unwrap()).unwrap();

    assert_eq!(decoded.status, Status::Accepted);
    assert_eq!(decoded.status.http_code(), 202);
    assert_eq!(decoded.record().unwrap(), record);
}

#[test]
fn test_encode_decode_league_response() {
    let league = vec![ScoreRecord::new("Bob", 3), ScoreRecord::new("Alice", 1)];
    let response = Response::league(&league).unwrap();

    let decoded = decode_response(&encode_response(&response).unwrap()).unwrap();

    assert_eq!(decoded.records().unwrap(), league);
}

#[test]
fn test_empty_league_response() {
    let response = Response::league(&[]).unwrap();

    let decoded = decode_response(&encode_response(&response).unwrap()).unwrap();

    assert!(decoded.records().unwrap().is_empty());
}

#[test]
fn test_not_found_response() {
    let decoded = decode_response(&encode_response(&Response::not_found()).unwrap()).unwrap();

    assert_eq!(decoded.status, Status::NotFound);
    assert_eq!(decoded.status.http_code(), 404);
    assert!(decoded.payload.is_none());
}

#[test]
fn test_error_response_message() {
    let decoded = decode_response(&encode_response(&Response::error("boom")).unwrap()).unwrap();

    assert_eq!(decoded.status, Status::Error);
    assert_eq!(decoded.message(), "boom");
}

#[test]
fn test_encode_oversized_response_rejected() {
    let response = Response::ok(Some(vec![0; MAX_PAYLOAD_SIZE as usize + 1]));

    assert!(matches!(
        encode_response(&response),
        Err(LedgerError::Protocol(_))
    ));
}

#[test]
fn test_encode_payload_at_limit_accepted() {
    let response = Response::ok(Some(vec![0; MAX_PAYLOAD_SIZE as usize]));

    let encoded = encode_response(&response).unwrap();

    assert_eq!(encoded.len(), HEADER_SIZE + MAX_PAYLOAD_SIZE as usize);
    assert_eq!(&encoded[1..HEADER_SIZE], &MAX_PAYLOAD_SIZE.to_be_bytes());
}

#[test]
fn test_encode_oversized_league_rejected() {
    let ledger = MemoryLedger::with_scores(
        (0..700_000u64).map(|i| (format!("player-{:07}", i), i + 1)),
    );
    let response = Response::league(&ledger.get_league().unwrap()).unwrap();
    assert!(response.payload.as_ref().unwrap().len() > MAX_PAYLOAD_SIZE as usize);

    assert!(matches!(
        encode_response(&response),
        Err(LedgerError::Protocol(_))
    ));
}

#[test]
fn test_encode_oversized_command_rejected() {
    let cmd = Command::RecordWin {
        name: "x".repeat(MAX_PAYLOAD_SIZE as usize + 1),
    };

    assert!(matches!(encode_command(&cmd), Err(LedgerError::Protocol(_))));
}

#[test]
fn test_decode_unknown_status() {
    assert!(matches!(
        decode_response(&[0x09, 0, 0, 0, 0]),
        Err(LedgerError::Protocol(_))
    ));
}

#[test]
fn test_from_error_mapping() {
    let not_found = Response::from_error(&LedgerError::NotFound("x".to_string()));
    assert_eq!(not_found.status, Status::NotFound);

    let unavailable = Response::from_error(&LedgerError::unavailable(
        "record_win",
        Some("x"),
        "disk full",
    ));
    assert_eq!(unavailable.status, Status::Error);
    assert_eq!(unavailable.status.http_code(), 500);
    assert!(!unavailable.message().contains("disk full"));
}

#[test]
fn test_record_on_empty_payload_fails() {
    assert!(matches!(
        Response::not_found().record(),
        Err(LedgerError::Protocol(_))
    ));
}

// =============================================================================
// Stream I/O Tests
// =============================================================================

#[test]
fn test_stream_command_sequence() {
    let mut buffer = Vec::new();
    let commands = vec![
        Command::RecordWin {
            name: "A".to_string(),
        },
        Command::GetScore {
            name: "A".to_string(),
        },
        Command::League,
        Command::Ping,
    ];
    for cmd in &commands {
        write_command(&mut buffer, cmd).unwrap();
    }

    let mut cursor = Cursor::new(buffer);
    for expected in &commands {
        assert_eq!(&read_command(&mut cursor).unwrap(), expected);
    }

    match read_command(&mut cursor) {
        Err(LedgerError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("Expected EOF, got {:?}", other),
    }
}

#[test]
fn test_stream_response() {
    let mut buffer = Vec::new();
    write_response(&mut buffer, &Response::ok(Some(b"PONG".to_vec()))).unwrap();
    write_response(&mut buffer, &Response::not_found()).unwrap();

    let mut cursor = Cursor::new(buffer);

    let first = read_response(&mut cursor).unwrap();
    assert_eq!(first.payload.as_deref(), Some(&b"PONG"[..]));

    let second = read_response(&mut cursor).unwrap();
    assert_eq!(second.status, Status::NotFound);
}

#[test]
fn test_oversized_write_leaves_stream_untouched() {
    let mut buffer = Vec::new();
    let response = Response::ok(Some(vec![0; MAX_PAYLOAD_SIZE as usize + 1]));

    assert!(write_response(&mut buffer, &response).is_err());
    assert!(buffer.is_empty());
}
