use colored::*;
use rand::Rng;

use crate::terminal::print;

const BANNER_0: &str = r#"
       ____  _                                              
      / ___|| |__   _____      ___ __ ___   ___  _ __ ___  
      \___ \| '_ \ / _ \ \ /\ / / '__/ _ \ / _ \| '_ ` _ \ 
       ___) | | | | (_) \ V  V /| | | (_) | (_) | | | | | |
      |____/|_| |_|\___/ \_/\_/ |_|  \___/ \___/|_| |_| |_|
"#;

const BANNER_1: &str = r#"
               ______
          ____/_||_ \___        _.-'~~~~'-._
         |  _     _    _\     /   (  )  (  ) \
         '-(_)---(_)--(_)    '--------------'
           road  .  rail  .  sea  .  sky
"#;

const BANNER_2: &str = r#"
        .----------------.   .---------------------.
        |  .----------.  |   |  .---------------.  |
        |  |  (o) ))) |  |   |  |  >_           |  |
        |  '----------'  |   |  '---------------'  |
        '----[  O  ]-----'   '---\_____________/---'
"#;

/// Prints one of the banners, picked at random.
pub fn print() {
    let n: u8 = rand::rng().random_range(0..=2);
    let art: ColoredString = match n {
        0 => BANNER_0.bright_green(),
        1 => BANNER_1.truecolor(255, 165, 0),
        _ => BANNER_2.blue(),
    };
    print::raw(&art.to_string());
}
