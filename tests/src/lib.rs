#![cfg(test)]

mod devices;
mod transport;
