mod frame_parser;
