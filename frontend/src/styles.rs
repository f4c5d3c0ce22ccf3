pub const PAGE: &str = "flex flex-col min-h-screen w-full bg-[#031329] overflow-hidden";
pub const OVERLAY_LAYER: &str = "absolute w-full h-full flex justify-center items-center pointer-events-none";
pub const OVERLAY_BOX: &str = "w-[300px] h-[300px] absolute";
pub const HEADER: &str = "flex flex-col absolute top-[32px] left-0 px-[30px] w-full z-10";
pub const TITLE: &str = "text-white text-center font-[Poppins] font-bold text-[32px]";
pub const SPIN_BUTTON: &str = "mt-[22px] rounded-[20px] h-[64px] select-none transition-all duration-100 bg-gradient-to-b from-[#21CC51] to-[#166E55] text-white font-[Poppins] font-bold text-[24px] active:scale-[0.85] disabled:opacity-70";
pub const WHEEL_AREA: &str = "absolute bottom-0 left-0 w-full h-[600px] translate-y-1/2";
pub const WHEEL_IMAGE: &str = "absolute w-full h-full object-contain transition-transform will-change-transform duration-[5s] ease-in-out";
pub const POINTER_IMAGE: &str = "absolute w-full h-full object-contain";
pub const MONEY_TEXT: &str = "text-white font-[800] text-[64px]";
pub const ADMIN_LIST: &str = "flex flex-col p-4 gap-2";
pub const ADMIN_BUTTON: &str = "px-4 py-2 text-white bg-indigo-600 rounded-lg duration-150 hover:bg-indigo-700 active:shadow-lg";
