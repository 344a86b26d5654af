//! Behavioural tests for the matrix composer, run on the host.
#![cfg(test)]

mod ripple;
mod serpentine;
mod support;
