#![allow(dead_code)]

pub mod command;
