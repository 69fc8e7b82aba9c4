//! Header command - Print a centred title

use super::HeaderArgs;
use crate::config::Config;
use crate::cli::exit_codes;
use crate::term::StyledString;

pub async fn execute(args: HeaderArgs, config: &Config) -> anyhow::Result<i32> {
    let mut options = config.header.options();
    if let Some(padding) = args.padding {
        options.padding = padding;
    }
    if let Some(left_spaces) = args.left_spaces {
        options.left_spaces = left_spaces;
    }
    if let Some(right_spaces) = args.right_spaces {
        options.right_spaces = right_spaces;
    }

    let codes = if args.codes.is_empty() {
        config.header.codes.clone()
    } else {
        args.codes
    };

    let mut styled = config
        .term
        .apply(StyledString::new(args.text).with_codes(codes));
    if args.force_sgr {
        styled = styled.with_force_sgr(true);
    }
    if args.force_prefix {
        styled = styled.with_force_prefix(true);
    }
    if args.stderr {
        styled = styled.with_is_error(true);
    }

    styled.header(&options)?;
    Ok(exit_codes::SUCCESS)
}
