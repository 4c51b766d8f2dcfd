//! Block and address builders shared by the integration suite and benches.

use shared_types::{Block, BlockHeader, Transaction, TxInput, TxOutput};

pub const HASH_LEN: usize = 28;

/// Mainnet base address with key-hash credentials.
pub fn base_address(payment: [u8; HASH_LEN], stake: [u8; HASH_LEN]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(1 + 2 * HASH_LEN);
    bytes.push(0x01);
    bytes.extend_from_slice(&payment);
    bytes.extend_from_slice(&stake);
    bytes
}

/// Mainnet enterprise address.
pub fn enterprise_address(payment: [u8; HASH_LEN]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(1 + HASH_LEN);
    bytes.push(0x61);
    bytes.extend_from_slice(&payment);
    bytes
}

/// Mainnet key-hash reward address.
pub fn reward_address(stake: [u8; HASH_LEN]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(1 + HASH_LEN);
    bytes.push(0xE1);
    bytes.extend_from_slice(&stake);
    bytes
}

/// A minimal Byron-shaped payload; only the header nibble matters.
pub fn byron_address() -> Vec<u8> {
    vec![0x82, 0xD8, 0x18, 0x58, 0x21, 0x83, 0x58, 0x1C, 0x0A, 0x0B, 0x0C]
}

pub fn header(slot: u64) -> BlockHeader {
    let mut hash = [0u8; 32];
    hash[..8].copy_from_slice(&slot.to_be_bytes());
    BlockHeader {
        slot,
        hash,
        height: slot,
    }
}

pub fn tx(id: u8, inputs: Vec<TxInput>, outputs: Vec<TxOutput>) -> Transaction {
    Transaction {
        hash: [id; 32],
        inputs,
        outputs,
    }
}

pub fn block(slot: u64, transactions: Vec<Transaction>) -> Block {
    Block::new(header(slot), transactions)
}

/// Spend of `output`, resolved as the follower would supply it.
pub fn spend(output: &TxOutput) -> TxInput {
    TxInput::resolved([0xEE; 32], 0, output.clone())
}
