mod cd;
mod chmod;
mod chown;
mod find;
mod free;
mod grep;
mod kill;
mod ls;
mod mkdir;
mod ps;
mod pwd;
mod rm;
mod top;
mod touch;
mod whoami;

pub use cd::ChangeDirectory;
pub use chmod::{ChangeMode, ChmodOptions};
pub use chown::{ChangeOwner, ChownOptions};
pub use find::{Find, FindOptions};
pub use free::{Free, FreeOptions};
pub use grep::{Grep, GrepOptions};
pub use kill::{Kill, KillOptions};
pub use ls::{ListDirectory, ListOptions};
pub use mkdir::{MakeDirOptions, MakeDirectory};
pub use ps::{ProcessListOptions, ProcessStatus};
pub use pwd::PrintWorkingDirectory;
pub use rm::{Remove, RemoveOptions};
pub use top::{Top, TopOptions, DEFAULT_TOP_DELAY};
pub use touch::{Touch, TouchOptions};
pub use whoami::WhoAmI;
