//! Test vectors are from GM/T 0004-2012
use digest::Digest;
use hex_literal::hex;
use sm3::Sm3;

#[test]
fn sm3_example_1() {
    let string = "abc".to_owned();
    let s = string.as_bytes();

    let mut hasher = Sm3::new();
    hasher.input(s);
    assert_eq!(
        format!("{:x}", hasher.result()),
        "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
    );
}

#[test]
fn sm3_example_2() {
    let string = "abcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd".to_owned();
    let s = string.as_bytes();

    let mut hasher = Sm3::new();
    hasher.input(s);
    assert_eq!(
        format!("{:x}", hasher.result()),
        "debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732"
    );
}

#[test]
fn sm3_empty_message() {
    assert_eq!(
        format!("{:x}", Sm3::digest(b"")),
        "1ab21d8355cfa17f8e61194831e81a8f22bea487ac547130bf5ddb25cebc5387"
    );
}

#[test]
fn oneshot_matches_incremental() {
    let digest = sm3::hash(b"abc");
    assert_eq!(
        digest,
        hex!("66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0")
    );
    assert_eq!(&digest[..], &Sm3::digest(b"abc")[..]);
}

#[test]
fn chunked_input_matches_whole_buffer() {
    let message = b"abcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd";
    let expected = Sm3::digest(&message[..]);

    for split in 0..message.len() {
        let mut hasher = Sm3::new();
        hasher.input(&message[..split]);
        hasher.input(&message[split..]);
        assert_eq!(hasher.result(), expected);
    }

    let mut hasher = Sm3::new();
    for byte in message.iter() {
        hasher.input([*byte]);
    }
    assert_eq!(hasher.result(), expected);
}

#[test]
fn buffering_across_block_boundaries() {
    for &len in &[1usize, 55, 56, 57, 63, 64, 65, 127, 128, 200] {
        let message = vec![0x61u8; len];
        let expected = Sm3::digest(&message);

        let mut hasher = Sm3::new();
        let split = len / 2;
        hasher.input(&message[..split]);
        hasher.input(&message[split..]);
        assert_eq!(hasher.result(), expected);
    }
}

#[test]
fn clones_are_independent() {
    let mut hasher = Sm3::new();
    hasher.input(b"abcd");
    let mut copy = hasher.clone();

    hasher.input(b"abcd");
    copy.input(b"efgh");

    assert_eq!(hasher.result(), Sm3::digest(b"abcdabcd"));
    assert_eq!(copy.result(), Sm3::digest(b"abcdefgh"));
}

#[test]
fn reset_restores_initial_state() {
    let mut hasher = Sm3::new();
    hasher.input(b"some discarded input");
    hasher.reset();
    hasher.input(b"abc");
    assert_eq!(
        format!("{:x}", hasher.result()),
        "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
    );
}

#[test]
fn algorithm_parameters() {
    assert_eq!(Sm3::NAME, "sm3");
    assert_eq!(Sm3::DIGEST_SIZE, 32);
    assert_eq!(Sm3::BLOCK_SIZE, 64);
    assert_eq!(sm3::hash(b"abc").len(), Sm3::DIGEST_SIZE);
}

#[cfg(feature = "accel")]
#[test]
fn accelerated_backend_matches_reference() {
    let messages: &[&[u8]] = &[
        b"",
        b"abc",
        b"abcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd",
        &[0u8; 1000],
    ];
    for message in messages {
        assert_eq!(&sm3::hash(message)[..], &Sm3::digest(message)[..]);
    }
}
