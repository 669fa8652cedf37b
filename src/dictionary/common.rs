/// Frequent English words used when no dictionary file is configured.
pub(super) const COMMON_ENGLISH_WORDS: &[&str] = &[
    "A", "ABOUT", "ABOVE", "ACROSS", "AFTER", "AGAIN", "AGAINST", "ALL", "ALMOST", "ALONE",
    "ALONG", "ALREADY", "ALSO", "ALWAYS", "AM", "AMONG", "AN", "AND", "ANOTHER", "ANY",
    "ARE", "AROUND", "AS", "ASK", "AT", "ATTACK", "AWAY", "BACK", "BE", "BECAUSE",
    "BEEN", "BEFORE", "BEHIND", "BEING", "BELOW", "BEST", "BETTER", "BETWEEN", "BIG", "BOTH",
    "BRING", "BROWN", "BUT", "BY", "CALL", "CAME", "CAN", "CASTLE", "CITY", "CODE",
    "COME", "COULD", "DAWN", "DAY", "DEFEND", "DID", "DO", "DOES", "DOG", "DOOR",
    "DOWN", "DURING", "EACH", "EAST", "EARLY", "END", "ENEMY", "EVEN", "EVER", "EVERY",
    "FAR", "FEW", "FIND", "FIRST", "FOR", "FORCE", "FOUND", "FOX", "FROM", "GATE",
    "GET", "GIVE", "GO", "GOOD", "GREAT", "HAD", "HAS", "HAVE", "HE", "HELLO",
    "HELP", "HER", "HERE", "HIDDEN", "HIM", "HIS", "HOLD", "HOME", "HOUSE", "HOW",
    "I", "IF", "IN", "INTO", "IS", "IT", "ITS", "JUMPS", "JUST", "KEEP",
    "KEY", "KNOW", "LAST", "LATER", "LAZY", "LEAVE", "LEFT", "LET", "LIFE", "LIGHT",
    "LIKE", "LITTLE", "LONG", "LOOK", "MADE", "MAKE", "MAN", "MANY", "MAY", "ME",
    "MEET", "MEN", "MESSAGE", "MIDNIGHT", "MIGHT", "MORE", "MORNING", "MOST", "MOVE", "MUCH",
    "MUST", "MY", "NAME", "NEAR", "NEED", "NEVER", "NEW", "NEXT", "NIGHT", "NO",
    "NORTH", "NOT", "NOW", "OF", "OFF", "OFTEN", "OLD", "ON", "ONCE", "ONE",
    "ONLY", "OPEN", "OR", "ORDER", "OTHER", "OUR", "OUT", "OVER", "OWN", "PART",
    "PARTY", "PEOPLE", "PLACE", "PLAN", "POINT", "QUICK", "RETREAT", "RIGHT", "RIVER", "ROAD",
    "RUN", "SAID", "SAME", "SAW", "SAY", "SECRET", "SEE", "SEND", "SHE", "SHOULD",
    "SHOW", "SIDE", "SINCE", "SMALL", "SO", "SOME", "SOON", "SOUTH", "STILL", "STOP",
    "SUCH", "TAKE", "TELL", "THAN", "THAT", "THE", "THEIR", "THEM", "THEN", "THERE",
    "THESE", "THEY", "THING", "THINK", "THIS", "THOSE", "THROUGH", "TIME", "TO", "TODAY",
    "TOGETHER", "TOMORROW", "TONIGHT", "TOO", "TOWN", "TROOPS", "TRY", "TURN", "TWO", "UNDER",
    "UNTIL", "UP", "UPON", "US", "USE", "VERY", "WAIT", "WALL", "WANT", "WAS",
    "WATER", "WAY", "WE", "WELL", "WENT", "WERE", "WEST", "WHAT", "WHEN", "WHERE",
    "WHICH", "WHILE", "WHO", "WHY", "WILL", "WITH", "WITHIN", "WITHOUT", "WORD", "WORK",
    "WORLD", "WOULD", "YEAR", "YES", "YET", "YOU", "YOUR",
];
