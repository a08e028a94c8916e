/// Target used for lines that must be written verbatim, without a level symbol.
pub const RAW_TARGET: &str = "showroom::print";

pub fn print(msg: &str) {
    tracing::info!(target: RAW_TARGET, raw_msg = msg);
}
