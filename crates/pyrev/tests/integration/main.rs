mod helpers;

mod check;
mod output_format;
