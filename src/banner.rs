//! Boot mastheads
//!
//! Printed to stdout before the loop starts, with short staged delays.

use std::time::Duration;

const MARK_1_ENDEAVOR: &str = r"  __  __            _      _____
 |  \/  | __ _ _ __| | __ |_   _|       ___ _  _ ___  ___   ___   _____  ___
 | \  / |/ _` | '__| |/ /   | |        | __| \| |   \| __| /_\ \ / / _ \| _ \
 | |\/| | (_| | |  |   <   _| |_   _   | _|| .` | |) | _| / _ \ V / (_) |   /
 |_|  |_|\__,_|_|  |_|\_\ |_____| |_|  |___|_|\_|___/|___/_/ \_\_/ \___/|_|_\";

const HAL_1000: &str = r"
 ██╗  ██╗ █████╗ ██╗          ██╗ ██████╗  ██████╗  ██████╗
 ██║  ██║██╔══██╗██║         ███║██╔═████╗██╔═████╗██╔═████╗
 ███████║███████║██║         ╚██║██║██╔██║██║██╔██║██║██╔██║
 ██╔══██║██╔══██║██║          ██║████╔╝██║████╔╝██║████╔╝██║
 ██║  ██║██║  ██║███████╗     ██║╚██████╔╝╚██████╔╝╚██████╔╝
 ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝     ╚═╝ ╚═════╝  ╚═════╝  ╚═════";

const TOM_SACHS: &str = r"
 A demonstration of machine consciousness.      .#+=:                      .:
                                               .*   =#.                   ++=#.
  =+#%*++++++:                                 =*    %-                  +*  **
 #  * #+                                        #- .#*                  .%:  %=
 +=:  -%-     .=+-   ::.                        :%+#=                   =%. ++      .#:
       ##   .=%=:*%++=#*  -+.  :=+-       ::     #%+      ..     .=**+  +%.*=        ##*.
     .-#%*+=*%====%+  +#:#-*%.*+ .%:      :*= .=#=.*=    *==#  -*+:     +%#**+#:  -  %..*-
    *#: #=  =#   :%.  :%%+ :%%+   **        +%%#.  .%+  =+  %-=%-    .:*#%%+  :#  +**+   #-
   -%.  #=  :%-.-*:    #+   -=    =#       +=:+.    #%  -#=*=:-=*++**+=: %#    +*-=*+*=--#=
    -++**    :==-                              *:+##%.    ..              =-     ::.    ..
";

/// Delay between mastheads
const STAGE_DELAY: Duration = Duration::from_millis(400);

/// Print the boot mastheads with staged delays
pub async fn print_mastheads() {
    println!("{MARK_1_ENDEAVOR}");
    tokio::time::sleep(STAGE_DELAY).await;
    println!("{HAL_1000}");
    tokio::time::sleep(STAGE_DELAY).await;
    println!("{TOM_SACHS}");
}

/// Print a yellow staged-configuration line
pub fn stage(text: &str) {
    println!("\x1b[33m{text}\x1b[0m");
}

/// Print the green go line and transcript header
pub fn all_systems_go() {
    println!("\x1b[32mALL SYSTEMS GO\x1b[0m");
    println!("\nTRANSCRIPT:\n");
}
