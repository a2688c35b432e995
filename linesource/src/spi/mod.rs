/// L4 SPI: integrations with concrete line-editing engines.
pub mod rustyline;
