//! Encrypts the FIPS-197 sample block and checks the published ciphertext.

use aes_block::Aes;

fn main() {
    let key: Vec<u8> = (0x00..0x10).collect();
    let plaintext = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let expected = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    let cipher = Aes::new(&key).expect("16-byte key");
    let ciphertext = cipher.encrypt_block(&plaintext).expect("16-byte block");
    assert_eq!(ciphertext, expected);

    let decrypted = cipher.decrypt_block(&ciphertext).expect("16-byte block");
    assert_eq!(decrypted, plaintext);

    println!("example succeeded; ciphertext matches the FIPS-197 vector");
}
